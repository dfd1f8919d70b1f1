use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};
use sidenote_core::config::CONFIG_FILE;
use sidenote_core::{persist, FileSystem, NoteStore, SidenoteConfig};

use crate::author::git_user_name;
use crate::highlight::HighlightController;
use crate::host::{Decorations, Messages};

/// Per-window session state: the note store, resolved author and the
/// active highlight. Owned by the host glue and passed into every
/// command handler; there are no ambient globals.
pub struct Session {
    config: SidenoteConfig,
    project_root: Option<PathBuf>,
    fs: Arc<dyn FileSystem>,
    pub store: NoteStore,
    pub author: Option<String>,
    pub highlight: HighlightController,
}

impl Session {
    /// Build the session for an (optionally absent) project root: load
    /// the configuration, resolve the author and read the persisted
    /// notes. A read failure is reported and degrades to an empty store.
    pub fn activate(
        project_root: Option<PathBuf>,
        fs: Arc<dyn FileSystem>,
        messages: &mut impl Messages,
    ) -> Self {
        let config = load_config(project_root.as_deref(), fs.as_ref(), messages);
        let author = config.author.clone().or_else(git_user_name);

        let store = match notes_path(project_root.as_deref(), &config) {
            Some(path) => match persist::load(&path, fs.as_ref()) {
                Ok(store) => {
                    debug!("loaded {} notes from {}", store.len(), path.display());
                    store
                }
                Err(err) => {
                    messages.error(&format!("Failed to read notes file: {err}"));
                    NoteStore::new()
                }
            },
            None => NoteStore::new(),
        };

        Self {
            config,
            project_root,
            fs,
            store,
            author,
            highlight: HighlightController::new(),
        }
    }

    /// Persist the store. Failures are reported and otherwise ignored;
    /// the in-memory store stays authoritative until the next successful
    /// save.
    pub fn save_notes(&self, messages: &mut impl Messages) {
        let Some(path) = notes_path(self.project_root.as_deref(), &self.config) else {
            messages.error("No workspace open — cannot save notes.");
            return;
        };
        if let Err(err) = persist::save(&path, &self.store, self.fs.as_ref()) {
            warn!("saving notes to {} failed: {err}", path.display());
            messages.error(&format!("Failed to save notes: {err}"));
        }
    }

    /// Any edit invalidates the highlighted line outright; no attempt is
    /// made to track line drift.
    pub fn on_document_changed(&mut self, decorations: &mut impl Decorations) {
        self.highlight.clear(decorations);
    }

    pub fn on_active_document_changed(&mut self, decorations: &mut impl Decorations) {
        self.highlight.clear(decorations);
    }
}

fn notes_path(root: Option<&Path>, config: &SidenoteConfig) -> Option<PathBuf> {
    root.map(|root| root.join(&config.notes_file))
}

fn load_config(
    root: Option<&Path>,
    fs: &dyn FileSystem,
    messages: &mut impl Messages,
) -> SidenoteConfig {
    let Some(root) = root else {
        return SidenoteConfig::default();
    };
    let path = root.join(CONFIG_FILE);
    if !fs.exists(&path) {
        return SidenoteConfig::default();
    }

    let raw = match fs.read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            messages.error(&format!("Failed to read {CONFIG_FILE}: {err}"));
            return SidenoteConfig::default();
        }
    };
    match SidenoteConfig::from_yaml(&raw) {
        Ok(config) => config,
        Err(err) => {
            messages.error(&format!("Invalid {CONFIG_FILE}: {err}"));
            SidenoteConfig::default()
        }
    }
}
