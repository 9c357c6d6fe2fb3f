//! Session history persistence.
//!
//! The [`SessionStore`] trait is consumed by the turn runner: history in,
//! full updated history out. Two backends ship here, a process-local map
//! and a single-file JSON store.

pub mod inmemory;
pub mod jsonfile;
pub mod session;
pub mod store;

pub use inmemory::InMemorySessionStore;
pub use jsonfile::JsonFileSessionStore;
pub use session::SessionRecord;
pub use store::SessionStore;
