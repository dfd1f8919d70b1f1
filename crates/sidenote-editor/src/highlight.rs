use crate::host::{DecorationStyle, DecorationToken, Decorations, RenderOptions};
use sidenote_core::Note;

/// Owns the single active highlight decoration, if any. A highlighted
/// line is not re-validated after edits; the session clears it outright
/// on any document change.
#[derive(Debug, Default)]
pub struct HighlightController {
    active: Option<DecorationToken>,
}

impl HighlightController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight `note`'s line: a whole-line marker with the type's gutter
    /// icon and the message (and author, when present) rendered after the
    /// line in the type's color. Any previous highlight is released first,
    /// even when the new note is in the same document.
    pub fn show(&mut self, decorations: &mut impl Decorations, note: &Note) {
        self.clear(decorations);

        let token = decorations.register(DecorationStyle {
            gutter_icon: format!("{}.png", note.kind.name()),
            whole_line: true,
        });

        let content_text = match &note.author {
            Some(author) => format!(" {} - {}", note.message, author),
            None => format!(" {}", note.message),
        };

        decorations.apply(
            token,
            &note.path,
            note.line,
            RenderOptions {
                content_text,
                color: note.kind.color().to_string(),
            },
        );

        self.active = Some(token);
    }

    /// Release the active highlight; safe to call when nothing is shown.
    pub fn clear(&mut self, decorations: &mut impl Decorations) {
        if let Some(token) = self.active.take() {
            decorations.dispose(token);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
