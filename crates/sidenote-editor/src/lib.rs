//! Sidenote Editor Integration
//!
//! Host-facing layer: translates editor events and picker input into
//! core note-store calls. The host editor itself is reached only through
//! the capability traits in [`host`].

pub mod author;
pub mod flow;
pub mod handlers;
pub mod highlight;
pub mod host;
pub mod session;

#[cfg(test)]
mod tests;

pub use host::EditorHost;
pub use session::Session;
