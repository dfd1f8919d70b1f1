use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Stable note identifier, independent of object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(pub Uuid);

impl NoteId {
    pub fn generate() -> Self {
        NoteId(Uuid::new_v4())
    }
}

/// Notes persisted before IDs existed deserialize with a fresh one.
impl Default for NoteId {
    fn default() -> Self {
        Self::generate()
    }
}

/// Closed set of note kinds; each carries a fixed icon glyph and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    Info,
    Add,
    Remove,
    Code,
    Bug,
    Question,
    Private,
}

impl NoteType {
    pub const ALL: [NoteType; 7] = [
        NoteType::Info,
        NoteType::Add,
        NoteType::Remove,
        NoteType::Code,
        NoteType::Bug,
        NoteType::Question,
        NoteType::Private,
    ];

    /// Lowercase name, matching the serialized form and icon asset names.
    pub fn name(self) -> &'static str {
        match self {
            NoteType::Info => "info",
            NoteType::Add => "add",
            NoteType::Remove => "remove",
            NoteType::Code => "code",
            NoteType::Bug => "bug",
            NoteType::Question => "question",
            NoteType::Private => "private",
        }
    }

    /// Capitalized name for menu entries ("Filter Info" etc.).
    pub fn label(self) -> &'static str {
        match self {
            NoteType::Info => "Info",
            NoteType::Add => "Add",
            NoteType::Remove => "Remove",
            NoteType::Code => "Code",
            NoteType::Bug => "Bug",
            NoteType::Question => "Question",
            NoteType::Private => "Private",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NoteType::Info => "comment",
            NoteType::Add => "diff-insert",
            NoteType::Remove => "diff-remove",
            NoteType::Code => "code",
            NoteType::Bug => "bug",
            NoteType::Question => "question",
            NoteType::Private => "lock",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            NoteType::Info => "#4278ddff",
            NoteType::Add => "#17be4fff",
            NoteType::Remove => "#e48e3eff",
            NoteType::Code => "#7e42ddff",
            NoteType::Bug => "#dd4242ff",
            NoteType::Question => "#ddd342ff",
            NoteType::Private => "#455574ff",
        }
    }

    /// Human description shown when prompting for a type.
    pub fn description(self) -> &'static str {
        match self {
            NoteType::Info => "Informational note",
            NoteType::Add => "Add something",
            NoteType::Remove => "Remove something",
            NoteType::Code => "Code / Terminal command",
            NoteType::Bug => "Bug / Error",
            NoteType::Question => "Question",
            NoteType::Private => "Private note",
        }
    }
}

/// One annotation attached to one line of one file.
///
/// `line` is the zero-based index at creation time; it is not re-anchored
/// when later edits shift lines (documented limitation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub id: NoteId,
    pub path: PathBuf,
    pub line: u32,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: u64,
    #[serde(rename = "type")]
    pub kind: NoteType,
    pub message: String,
    pub author: Option<String>,
}
