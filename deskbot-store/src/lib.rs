//! Tabular data store for the chatbot.
//!
//! Tables are loaded once at startup from a [`TableSource`] (typically a
//! directory of JSON files) into an immutable [`TabularStore`] that the
//! search tools query for the rest of the process lifetime.

pub mod source;
pub mod store;
pub mod table;

pub use source::{JsonDirSource, TableSource};
pub use store::{TabularStore, ACCOUNTING_TABLES, SUPPORT_TABLE};
pub use table::{Record, Table};
