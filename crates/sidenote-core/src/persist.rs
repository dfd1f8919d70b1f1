use crate::store::NoteStore;
use crate::vfs::FileSystem;
use std::path::Path;
use thiserror::Error;

/// Default name of the persisted notes file, relative to the project root.
pub const NOTES_FILE: &str = ".2do";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read the notes file. An absent file is an empty store; malformed
/// content is an error the caller reports before degrading to empty.
pub fn load(path: &Path, fs: &dyn FileSystem) -> Result<NoteStore, PersistError> {
    if !fs.exists(path) {
        return Ok(NoteStore::new());
    }
    let raw = fs.read_to_string(path)?;
    let store = serde_json::from_str(&raw)?;
    Ok(store)
}

/// Write the full store as pretty-printed JSON (2-space indentation).
/// On failure the previous on-disk content is untouched and the
/// in-memory store stays authoritative.
pub fn save(path: &Path, store: &NoteStore, fs: &dyn FileSystem) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(store)?;
    fs.write_string(path, &json)?;
    Ok(())
}
