//! # Session wiring
//!
//! Builds the [`Session`] (API facade, console, styler), registers every REPL
//! command on an [`Interpreter`] and runs it.
//!
//! Handlers are thin: read any follow-up input from the console, call one
//! `JotApi` method, render the `CmdResult`. In batch mode the console reads
//! from an empty input, so follow-up prompts see end of input and get `""`.

use super::render::{
    render_documents, render_keys, render_messages, render_state, render_todo, with_messages,
};
use super::setup::Cli;
use super::styles;
use clap::Parser;
use jotbox::api::JotApi;
use jotbox::commands::{CmdMessage, CmdResult};
use jotbox::config::JotConfig;
use jotbox::error::{JotError, Result};
use jotbox::repl::{Console, Interpreter, Reply, Styler, Terminal};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable holding the `env_logger` filter.
const LOG_ENV: &str = "JOTBOX_LOG";

/// Everything a handler gets to work with.
pub struct Session {
    pub api: JotApi,
    pub console: Console,
    pub styler: Styler,
}

impl Terminal for Session {
    fn console(&mut self) -> &mut Console {
        &mut self.console
    }
}

impl Session {
    fn reply(&self, body: String, result: &CmdResult) -> Reply {
        Reply::output(with_messages(body, result, self.styler))
    }

    fn say(&self, message: CmdMessage) -> Reply {
        Reply::output(render_messages(&[message], self.styler))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config();
    let color = config.color && !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }
    let styler = styles::styler(color);

    let root = resolve_workdir(&std::env::current_dir()?, cli.workdir.as_deref())?;
    log::debug!("opening cache at {}", root.display());
    let api = JotApi::open(root)?;

    let console = if cli.interactive {
        Console::stdio()
    } else {
        Console::new(io::empty(), io::stdout())
    }
    .with_assume_yes(cli.assume_yes);

    let mut session = Session {
        api,
        console,
        styler,
    };

    let mut interp: Interpreter<Session> = Interpreter::new().with_styler(styler);
    register_commands(&mut interp);

    interp.enqueue(config.startup_commands.iter().cloned());
    if cli.interactive {
        interp.enqueue(cli.commands.iter().cloned());
    } else if cli.commands.is_empty() {
        interp.enqueue(["ls", "exit"]);
    } else {
        interp.enqueue(cli.commands.iter().cloned());
        interp.enqueue(["exit"]);
    }
    for line in config.on_exit_commands.iter().chain(cli.on_exit.iter()) {
        interp.on_exit_command(line.as_str());
    }

    let prompt = cli.prompt.unwrap_or(config.prompt);
    let outcome = interp.run(&mut session, &prompt)?;
    log::debug!("session ended: {:?}", outcome);
    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_config() -> JotConfig {
    let Some(dir) = JotConfig::default_dir() else {
        return JotConfig::default();
    };
    JotConfig::load(&dir).unwrap_or_else(|e| {
        log::warn!("ignoring config in {}: {}", dir.display(), e);
        JotConfig::default()
    })
}

/// Absolute, symlink-free root for `workdir`, taken relative to `cwd`.
fn resolve_workdir(cwd: &Path, workdir: Option<&Path>) -> Result<PathBuf> {
    let joined = match workdir {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };
    fs::canonicalize(&joined).map_err(|_| JotError::InvalidRoot(joined))
}

pub fn register_commands(interp: &mut Interpreter<Session>) {
    interp.add("ls", "list document keys", |s| {
        let result = s.api.list_keys()?;
        Ok(s.reply(render_keys(&result.keys), &result))
    });
    interp.add("la", "show every document", |s| {
        let result = s.api.list_documents()?;
        Ok(s.reply(render_documents(&result.listed), &result))
    });
    interp.add_with_arg("show", "show title and content", |s, name| {
        let result = s.api.show(name)?;
        Ok(s.reply(render_documents(&result.listed), &result))
    });

    interp.add("new", "new document", |s| {
        let name = s.console.prompt("filename:>")?;
        new_document(s, &name)
    });
    interp.add_with_arg("new", "", new_document);

    interp.add_with_arg("remove", "remove a document file", |s, name| {
        let result = s.api.remove(name)?;
        Ok(s.reply(String::new(), &result))
    });
    interp.add("write", "write all documents to the directory", |s| {
        let question = format!("write documents into {}", s.api.root().display());
        if !s.console.confirm(&question)? {
            return Ok(s.say(CmdMessage::info("nothing written")));
        }
        let result = s.api.write_all()?;
        Ok(s.reply(String::new(), &result))
    });
    interp.add("state", "show directory and override flags", |s| {
        let result = s.api.state()?;
        Ok(s.reply(
            render_state(result.root.as_deref(), &result.listed),
            &result,
        ))
    });
    interp.add("reload", "rescan the directory", |s| {
        let result = s.api.reload()?;
        Ok(s.reply(String::new(), &result))
    });

    interp.add("cd", "change directory", |s| {
        let target = s.console.prompt("cd path:>")?;
        change_root(s, &target)
    });
    interp.add_with_arg("cd", "", change_root);

    interp.add("todo", "list todo items, or add one with `todo <text>`", |s| {
        let result = s.api.todo_list()?;
        Ok(s.reply(render_todo(&result.listed), &result))
    });
    interp.add_with_arg("todo", "", |s, text| {
        let result = s.api.todo_add(text)?;
        Ok(s.reply(String::new(), &result))
    });
    interp.add_with_arg("done", "mark todo item <n> as done", |s, number| {
        let result = s.api.todo_done(number)?;
        Ok(s.reply(String::new(), &result))
    });

    interp.add_exit_alias(":q");
}

fn new_document(s: &mut Session, name: &str) -> Result<Reply> {
    if name.trim().is_empty() {
        return Ok(s.say(CmdMessage::error("no filename given")));
    }
    let overridable = s.console.confirm("accept override")?;
    let title = s.console.prompt("title:>")?;
    let content = read_content(&mut s.console)?;
    let result = s.api.create(name, title.trim(), content, overridable)?;
    Ok(s.reply(String::new(), &result))
}

/// Reads content lines until an empty line or end of input.
fn read_content(console: &mut Console) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut msg = "content:>";
    loop {
        let line = console.prompt(msg)?;
        if line.is_empty() {
            return Ok(lines);
        }
        lines.push(line);
        msg = "";
    }
}

fn change_root(s: &mut Session, target: &str) -> Result<Reply> {
    if target.trim().is_empty() {
        return Ok(s.say(CmdMessage::error("no directory given")));
    }
    let result = s.api.change_root(target.trim())?;
    Ok(s.reply(String::new(), &result))
}
