//! # Jotbox Architecture
//!
//! Jotbox keeps notes and todo lists as small JSON documents under one root
//! directory. Documents are loaded into an in-memory cache, edited through an
//! interactive command loop, and written back only when asked.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, owns stdin/stdout, colors, exit codes  │
//! │  - Registers REPL commands on the interpreter               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Interpreter (repl/)                                        │
//! │  - Command registry, dispatch, pending queue, exit hooks    │
//! │  - Console: line input, prompt, confirm                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) → Commands (commands/*.rs)                    │
//! │  - One function per command, returns CmdResult              │
//! │  - No terminal I/O                                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/) and Document (model.rs)                     │
//! │  - Recursive discovery, key ↔ path mapping, load/save      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Keys
//!
//! A document's key is its path relative to the root, with `/` separators:
//! `notes.json`, `todo/todo.json`. Keys are unique within a cache, and every
//! document path lives under the root.
//!
//! ## Overwrite safety
//!
//! `save` refuses to overwrite an existing file unless the document is
//! overridable. The shell's `new` asks `accept override`; answering no means
//! a file that appears on disk behind the session's back is left alone and
//! `write` reports `AlreadyExists` for that key. Documents discovered by a
//! scan are always overridable.
//!
//! ## Testing
//!
//! Commands, store and interpreter are unit tested in place against temporary
//! directories and in-memory consoles. The binary is driven end to end by the
//! tests in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: facade over the command layer
//! - [`commands`]: command implementations and `CmdResult`
//! - [`config`]: user preferences
//! - [`error`]: `JotError` and the crate `Result`
//! - [`model`]: `Document` and its file format
//! - [`repl`]: interpreter, registry and console
//! - [`store`]: `DocumentCache` and discovery

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod repl;
pub mod store;

#[cfg(test)]
pub mod test_utils;
