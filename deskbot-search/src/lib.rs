//! Lexical search over the tabular store.
//!
//! Two policies share one tokenizer: the accounting policy is an
//! unranked any-keyword substring filter with a single-keyword retry,
//! the support policy ranks rows by a hybrid keyword-count plus
//! token-overlap score and renders the top rows in chunks.

pub mod engine;
pub mod format;
pub mod keywords;

pub use engine::SearchEngine;
pub use keywords::derive_keywords;
