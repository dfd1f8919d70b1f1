use crate::persist::NOTES_FILE;
use serde::{Deserialize, Serialize};

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE: &str = ".sidenote.yml";

/// Per-project settings, loaded once at activation. Every field has a
/// default so a missing or partial file still yields a usable config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidenoteConfig {
    /// Name of the notes file, relative to the project root.
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Display-name override; when set, the git lookup is skipped.
    #[serde(default)]
    pub author: Option<String>,
}

fn default_notes_file() -> String {
    NOTES_FILE.to_string()
}

impl Default for SidenoteConfig {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file(),
            author: None,
        }
    }
}

impl SidenoteConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
