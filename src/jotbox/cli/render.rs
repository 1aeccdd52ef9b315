//! # Rendering
//!
//! Turns a [`CmdResult`] into the text a REPL handler replies with. Every
//! function here is pure: it returns a `String` and leaves writing to the
//! interpreter. Colors only enter through the [`Styler`] used for messages.

use jotbox::commands::{CmdMessage, CmdResult, ListedDocument};
use jotbox::repl::Styler;
use std::path::Path;

/// One key per line, as printed by `ls`.
pub fn render_keys(keys: &[String]) -> String {
    let mut out = String::new();
    for key in keys {
        out.push_str(key);
        out.push('\n');
    }
    out
}

/// Full documents, as printed by `la` and `show`.
pub fn render_documents(docs: &[ListedDocument]) -> String {
    let mut out = String::new();
    for doc in docs {
        out.push_str(&format!("----- {} -----\n", doc.key));
        out.push_str(&format!("[ {} ]\n", doc.title));
        for line in &doc.content {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// The cache root followed by each key's overwrite flag.
pub fn render_state(root: Option<&Path>, docs: &[ListedDocument]) -> String {
    let mut out = String::new();
    if let Some(root) = root {
        out.push_str(&format!("dir: {}\n", root.display()));
    }
    for doc in docs {
        out.push_str(&format!("---------- {} ----------\n", doc.key));
        out.push_str(&format!("override: {}\n", doc.overridable));
    }
    out
}

/// Numbered todo items, starting at 1 so the numbers work with `done`.
pub fn render_todo(docs: &[ListedDocument]) -> String {
    let mut out = String::new();
    for doc in docs {
        for (i, line) in doc.content.iter().enumerate() {
            out.push_str(&format!("{:>3}. {}\n", i + 1, line));
        }
    }
    out
}

pub fn render_messages(messages: &[CmdMessage], styler: Styler) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&styler(message.level, &message.content));
        out.push('\n');
    }
    out
}

/// `body` followed by the result's messages.
pub fn with_messages(body: String, result: &CmdResult, styler: Styler) -> String {
    let mut out = body;
    out.push_str(&render_messages(&result.messages, styler));
    out
}
