//! # Storage Layer
//!
//! Documents live as individual `*.json` files anywhere below a root directory.
//! [`DocumentCache`] mirrors that tree in memory:
//!
//! ```text
//! <root>/
//! ├── shopping.json        key: "shopping.json"
//! ├── work/
//! │   └── standup.json     key: "work/standup.json"
//! └── todo/
//!     ├── todo.json        key: "todo/todo.json"
//!     └── done.json        key: "todo/done.json"
//! ```
//!
//! Keys are root-relative paths with `/` separators. The cache never writes or
//! deletes on its own: callers decide when to [`DocumentCache::write_all`] or
//! [`DocumentCache::delete`].
//!
//! Overwrite safety lives on the document: a document that is not overridable
//! refuses to replace an existing file. Files found by a scan are overridable,
//! since they came from disk in the first place.

use crate::error::JotError;

pub mod cache;
mod walk;

pub use cache::DocumentCache;

/// Outcome of a [`DocumentCache::write_all`] pass.
///
/// Individual failures do not stop the pass; they are collected here.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<String>,
    pub failures: Vec<(String, JotError)>,
}

impl WriteReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
