use crate::host::EditorHost;
use sidenote_core::Note;

/// Open the note's document and reveal its line centered in view.
pub fn goto_note(host: &mut impl EditorHost, note: &Note) {
    host.open_and_reveal(&note.path, note.line);
}
