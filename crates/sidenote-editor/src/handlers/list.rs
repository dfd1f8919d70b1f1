use super::{goto_note, scoped_notes};
use crate::flow::SelectionFlow;
use crate::host::EditorHost;
use crate::session::Session;

/// Browse/filter/order the current scope's notes, then jump to the
/// picked one and highlight it. Cancelling anywhere leaves everything
/// untouched.
pub fn list_notes(session: &mut Session, host: &mut impl EditorHost) {
    let Some((scope, notes)) = scoped_notes(session, host) else {
        return;
    };

    let Some(note) = SelectionFlow::new(scope).run(host, &notes) else {
        return;
    };

    goto_note(host, &note);
    session.highlight.show(host, &note);
}
