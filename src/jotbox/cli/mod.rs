//! # CLI Layer
//!
//! One possible front end for jotbox, and the only place that knows about
//! stdin, stdout, colors and exit codes.
//!
//! - `setup`: clap argument definitions
//! - `commands`: session construction and REPL command registration
//! - `render`: `CmdResult` to text
//! - `styles`: message colors
//!
//! Business logic stays in the library's command layer; handlers here only
//! gather input, call `JotApi` and render the result.

pub mod commands;
pub mod render;
pub mod setup;
pub mod styles;

pub use commands::run;
