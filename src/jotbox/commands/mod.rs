//! # Command Layer
//!
//! One module per interactive command. Each `run` takes the cache plus plain
//! Rust arguments and returns a [`CmdResult`]; none of them touch the console.
//!
//! Problems a user can fix by typing something else (unknown key, bad name,
//! a document that refuses to be overwritten) are reported as
//! [`MessageLevel::Error`] messages, not as `Err`, so one typo does not end an
//! interactive session.

use crate::error::JotError;
use crate::model::Document;
use std::path::PathBuf;

pub mod cd;
pub mod create;
pub mod helpers;
pub mod list;
pub mod reload;
pub mod remove;
pub mod show;
pub mod state;
pub mod todo;
pub mod write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

impl From<JotError> for CmdMessage {
    fn from(err: JotError) -> Self {
        CmdMessage::error(err.to_string())
    }
}

/// Snapshot of a cached document, detached from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedDocument {
    pub key: String,
    pub title: String,
    pub content: Vec<String>,
    pub overridable: bool,
}

impl ListedDocument {
    pub fn new(key: &str, doc: &Document) -> Self {
        Self {
            key: key.to_string(),
            title: doc.title.clone(),
            content: doc.content.clone(),
            overridable: doc.is_overridable(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedDocument>,
    pub keys: Vec<String>,
    pub root: Option<PathBuf>,
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, listed: Vec<ListedDocument>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    /// A result carrying only an error message.
    pub fn failed(err: JotError) -> Self {
        Self::default().with_message(err.into())
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
