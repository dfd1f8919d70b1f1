//! Abstract contracts for the host editor's UI primitives. The real
//! editor glue implements these; tests use scripted fakes.

use std::path::{Path, PathBuf};

/// One row of a quick-pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub description: String,
}

impl PickItem {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

pub trait Picker {
    /// Present `items` and block until the user chooses one or dismisses
    /// the list. Returns the chosen index, or None on cancel.
    fn pick(&mut self, items: &[PickItem], placeholder: &str) -> Option<usize>;
}

pub trait Messages {
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Handle for a registered decoration style; disposing it detaches every
/// application made under it and releases its resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationToken(pub u64);

/// Reusable visual style registered once per highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationStyle {
    /// Gutter icon asset name, derived from the note type.
    pub gutter_icon: String,
    pub whole_line: bool,
}

/// Per-application rendering: trailing text after the highlighted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub content_text: String,
    pub color: String,
}

pub trait Decorations {
    fn register(&mut self, style: DecorationStyle) -> DecorationToken;
    fn apply(&mut self, token: DecorationToken, path: &Path, line: u32, render: RenderOptions);
    fn dispose(&mut self, token: DecorationToken);
}

/// Current selection in the active editor. `text` is empty when the
/// selection is a bare caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Zero-based line of the selection start.
    pub line: u32,
    pub text: String,
}

pub trait Documents {
    fn active_document(&self) -> Option<PathBuf>;

    /// Selection in the active editor; None when no editor is open.
    fn selection(&self) -> Option<Selection>;

    /// Replace the current selection with nothing.
    fn delete_selection(&mut self);

    /// Open the document and reveal the line centered in view.
    fn open_and_reveal(&mut self, path: &Path, line: u32);
}

/// Everything a command handler needs from the host, in one bound.
pub trait EditorHost: Picker + Messages + Decorations + Documents {}

impl<T: Picker + Messages + Decorations + Documents> EditorHost for T {}
