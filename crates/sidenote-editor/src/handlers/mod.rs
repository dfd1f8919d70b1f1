//! The four user-facing commands, each a plain function over the session
//! and the host capabilities.

mod add;
mod delete;
mod goto;
mod list;

pub use add::*;
pub use delete::*;
pub use goto::*;
pub use list::*;

use crate::host::EditorHost;
use crate::session::Session;
use sidenote_core::{ListScope, Note};

/// Candidate notes for the current context: the active document's notes
/// when an editor is open, otherwise every note in the project. Reports
/// an informational message and yields None when the scope is empty.
fn scoped_notes(
    session: &Session,
    host: &mut impl EditorHost,
) -> Option<(ListScope, Vec<Note>)> {
    match host.active_document() {
        Some(path) => {
            let notes: Vec<Note> = session
                .store
                .list(Some(&path))
                .into_iter()
                .cloned()
                .collect();
            if notes.is_empty() {
                host.info(&format!("{} doesn't have any notes!", path.display()));
                return None;
            }
            Some((ListScope::CurrentFile, notes))
        }
        None => {
            let notes: Vec<Note> = session.store.list(None).into_iter().cloned().collect();
            if notes.is_empty() {
                host.info("This project doesn't have any notes!");
                return None;
            }
            Some((ListScope::Project, notes))
        }
    }
}
