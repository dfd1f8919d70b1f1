use super::scoped_notes;
use crate::flow::SelectionFlow;
use crate::host::EditorHost;
use crate::session::Session;

/// Browse/select a note and delete it. A pick made from a stale list may
/// already be gone; that counts as done and nothing is re-persisted.
pub fn delete_note(session: &mut Session, host: &mut impl EditorHost) {
    if let Some((scope, notes)) = scoped_notes(session, host) {
        if let Some(note) = SelectionFlow::new(scope).run(host, &notes) {
            if session.store.remove(&note) {
                session.save_notes(host);
            }
        }
    }

    session.highlight.clear(host);
}
