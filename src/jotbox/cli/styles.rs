//! Message colors. The core never colors anything; the CLI picks one of these
//! functions and hands it to the interpreter and the renderer.

use colored::Colorize;
use jotbox::commands::MessageLevel;
use jotbox::repl::{plain, Styler};

pub fn colored(level: MessageLevel, text: &str) -> String {
    match level {
        MessageLevel::Info => text.dimmed().to_string(),
        MessageLevel::Success => text.green().to_string(),
        MessageLevel::Warning => text.yellow().to_string(),
        MessageLevel::Error => text.red().to_string(),
    }
}

pub fn styler(color: bool) -> Styler {
    if color {
        colored
    } else {
        plain
    }
}
