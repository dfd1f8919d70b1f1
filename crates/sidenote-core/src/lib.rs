//! Sidenote Core Library
//!
//! Note model, in-memory store, JSON persistence codec and formatting.
//! No editor dependencies, pure logic only.
//!

pub mod config;
pub mod format;
pub mod model;
pub mod persist;
pub mod store;
pub mod utils;
pub mod vfs;

pub use config::SidenoteConfig;
pub use format::{summarize, time_ago, ListScope, Summary};
pub use model::{Note, NoteId, NoteType};
pub use persist::PersistError;
pub use store::NoteStore;
pub use vfs::{FileSystem, PhysicalFileSystem};
