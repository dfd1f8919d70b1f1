use crate::model::{Note, NoteId, NoteType};
use crate::utils::now_millis;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory index of notes, keyed by absolute file path.
///
/// Per-path insertion order is preserved; order across paths is not
/// guaranteed. Serializes directly as the persisted `.2do` object.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStore {
    notes: HashMap<PathBuf, Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new note to `path`'s list, creating the list if absent.
    /// Validation (non-empty message) happens at the UI boundary.
    pub fn add(
        &mut self,
        path: PathBuf,
        line: u32,
        kind: NoteType,
        message: String,
        author: Option<String>,
    ) -> Note {
        let note = Note {
            id: NoteId::generate(),
            path: path.clone(),
            line,
            timestamp: now_millis(),
            kind,
            message,
            author,
        };
        self.notes.entry(path).or_default().push(note.clone());
        note
    }

    /// Remove `note` from its path's list, matching by ID. Returns false
    /// when it is no longer present, so a pick made from a stale list is
    /// an observable no-op rather than an error.
    pub fn remove(&mut self, note: &Note) -> bool {
        let Some(list) = self.notes.get_mut(&note.path) else {
            return false;
        };
        let before = list.len();
        list.retain(|n| n.id != note.id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.notes.remove(&note.path);
        }
        removed
    }

    /// Notes for one path in insertion order, or every note in the store
    /// when no path is given.
    pub fn list(&self, path: Option<&Path>) -> Vec<&Note> {
        match path {
            Some(path) => self
                .notes
                .get(path)
                .map(|list| list.iter().collect())
                .unwrap_or_default(),
            None => self.notes.values().flatten().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.notes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.values().all(Vec::is_empty)
    }
}
