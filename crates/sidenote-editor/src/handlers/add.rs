use crate::host::{EditorHost, PickItem};
use crate::session::Session;
use sidenote_core::NoteType;

/// Create a note from the current selection: prompt for a type, store
/// the selected text as the note body, persist, then remove the text
/// from the document. Cancelling the prompt aborts with no state change.
pub fn add_note(session: &mut Session, host: &mut impl EditorHost) {
    let items: Vec<PickItem> = NoteType::ALL
        .iter()
        .map(|kind| PickItem::new(format!("$({})", kind.icon()), kind.description()))
        .collect();
    let picked = host.pick(&items, "Note type");

    let Some(path) = host.active_document() else {
        host.info("No active editor");
        return;
    };
    let Some(selection) = host.selection() else {
        host.info("No text selected");
        return;
    };
    if selection.text.is_empty() {
        host.info("No text selected");
        return;
    }

    let Some(index) = picked else {
        return;
    };
    let kind = NoteType::ALL[index];

    session.store.add(
        path,
        selection.line,
        kind,
        selection.text,
        session.author.clone(),
    );
    session.save_notes(host);
    host.delete_selection();
}
