//! # Command Interpreter
//!
//! A line-oriented read-eval-print loop. Each line is `<name>` or
//! `<name> <argument>`; the name selects a registered command and the
//! argument, if any, is passed through verbatim (trimmed).
//!
//! ## Session
//!
//! The interpreter is generic over a session type `C`. Every handler receives
//! `&mut C`, so handlers reach the document cache and the console through the
//! session instead of through shared globals. The only requirement on `C` is
//! [`Terminal`]: the loop needs the console to read lines and print replies.
//!
//! ## Dispatch
//!
//! A command is registered as a [`Handler`]: no-arg, one-arg, or both.
//!
//! | line          | registered       | fires                                 |
//! |---------------|------------------|---------------------------------------|
//! | `show`        | NoArg / Both     | no-arg form                           |
//! | `show a.json` | OneArg / Both    | one-arg form with `"a.json"`          |
//! | `ls extra`    | NoArg only       | nothing, `invalid subcommand: argument` |
//! | `show`        | OneArg only      | nothing, `invalid subcommand: argument` |
//!
//! Unknown names and arity mismatches are reported and the loop continues.
//! A handler error ends the loop and is returned to the caller.
//!
//! ## Input sources
//!
//! Lines queued with [`Interpreter::enqueue`] run first, in order, without a
//! prompt. Once the queue is empty the loop prompts and reads the console.
//!
//! ## Exit
//!
//! A handler ends the session by returning [`Reply::Exit`]. The loop prints
//! the reply, runs the exit hooks in registration order, and returns
//! [`RunOutcome::Exited`]. Reaching the end of input returns
//! [`RunOutcome::EndOfInput`] without running the hooks.

pub mod console;
pub mod registry;

pub use console::{Console, Terminal};
pub use registry::{Builtin, Handler, NoArgHandler, OneArgHandler, Registry, Route};

use crate::commands::MessageLevel;
use crate::error::{JotError, Result};
use std::collections::VecDeque;

/// What a handler hands back to the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep going.
    Output(String),
    /// Print the text and end the session cleanly.
    Exit(String),
}

impl Reply {
    pub fn output(text: impl Into<String>) -> Self {
        Reply::Output(text.into())
    }

    pub fn exit(text: impl Into<String>) -> Self {
        Reply::Exit(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Reply::Output(text) | Reply::Exit(text) => text,
        }
    }
}

/// How a [`Interpreter::run`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Exited,
    EndOfInput,
}

/// Presentation hook applied to the interpreter's own diagnostics.
pub type Styler = fn(MessageLevel, &str) -> String;

/// The default [`Styler`]: text as-is.
pub fn plain(_level: MessageLevel, text: &str) -> String {
    text.to_string()
}

enum ExitHook<C> {
    Callback(NoArgHandler<C>),
    Command(String),
}

pub struct Interpreter<C> {
    registry: Registry<C>,
    pending: VecDeque<String>,
    on_exit: Vec<ExitHook<C>>,
    styler: Styler,
}

impl<C: Terminal> Default for Interpreter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Terminal> Interpreter<C> {
    /// An interpreter that knows `exit` and `help`.
    pub fn new() -> Self {
        Self {
            registry: Registry::with_builtins(),
            pending: VecDeque::new(),
            on_exit: Vec::new(),
            styler: plain,
        }
    }

    pub fn with_styler(mut self, styler: Styler) -> Self {
        self.styler = styler;
        self
    }

    pub fn register(&mut self, name: &str, handler: Handler<C>, help: &str) {
        self.registry.register(name, handler, help);
    }

    /// Registers the no-arg form of `name`.
    pub fn add<F>(&mut self, name: &str, help: &str, f: F)
    where
        F: FnMut(&mut C) -> Result<Reply> + 'static,
    {
        self.registry.register(name, Handler::NoArg(Box::new(f)), help);
    }

    /// Registers the one-arg form of `name`.
    pub fn add_with_arg<F>(&mut self, name: &str, help: &str, f: F)
    where
        F: FnMut(&mut C, &str) -> Result<Reply> + 'static,
    {
        self.registry
            .register(name, Handler::OneArg(Box::new(f)), help);
    }

    /// Makes `name` behave like `exit`.
    pub fn add_exit_alias(&mut self, name: &str) {
        self.registry
            .register_builtin(name, Builtin::Exit, "exit alias");
    }

    /// Queues command lines to run before any live input is read.
    pub fn enqueue<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending.extend(lines.into_iter().map(Into::into));
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Adds a hook run after a clean exit.
    pub fn on_exit<F>(&mut self, f: F)
    where
        F: FnMut(&mut C) -> Result<Reply> + 'static,
    {
        self.on_exit.push(ExitHook::Callback(Box::new(f)));
    }

    /// Adds a command line dispatched after a clean exit.
    pub fn on_exit_command(&mut self, line: impl Into<String>) {
        self.on_exit.push(ExitHook::Command(line.into()));
    }

    /// Runs the loop until an exit reply, end of input, or an error.
    pub fn run(&mut self, session: &mut C, prompt: &str) -> Result<RunOutcome> {
        loop {
            let Some(line) = self.next_line(session, prompt)? else {
                log::debug!("end of input");
                return Ok(RunOutcome::EndOfInput);
            };
            match self.execute(session, &line)? {
                Some(Reply::Output(text)) => session.console().write_block(&text)?,
                Some(Reply::Exit(text)) => {
                    session.console().write_block(&text)?;
                    self.run_exit_hooks(session)?;
                    return Ok(RunOutcome::Exited);
                }
                None => {}
            }
        }
    }

    /// Dispatches a single line. `None` means nothing was run: the line was
    /// empty, or a diagnostic has already been written.
    pub fn execute(&mut self, session: &mut C, line: &str) -> Result<Option<Reply>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (name, argument) = split_command(line);

        let Some(route) = self.registry.route(name, argument.is_some()) else {
            self.diagnose(session, &format!("invalid subcommand: {:?}", name))?;
            return Ok(None);
        };
        match route {
            Route::UnexpectedArgument => {
                let msg = format!(
                    "invalid subcommand: argument {:?} not accepted by {:?}",
                    argument.unwrap_or_default(),
                    name
                );
                self.diagnose(session, &msg)?;
                return Ok(None);
            }
            Route::MissingArgument => {
                let msg = format!("invalid subcommand: argument required by {:?}", name);
                self.diagnose(session, &msg)?;
                return Ok(None);
            }
            Route::NoArg | Route::OneArg => {}
        }

        log::debug!("dispatch {} {:?}", name, route);
        match self.registry.builtin(name) {
            Some(Builtin::Exit) => return Ok(Some(Reply::exit(""))),
            Some(Builtin::Help) => return Ok(Some(Reply::output(self.registry.render_help()))),
            None => {}
        }
        match self
            .registry
            .handler_mut(name)
            .and_then(|handler| handler.call(session, argument))
        {
            Some(reply) => reply.map(Some),
            None => Ok(None),
        }
    }

    fn next_line(&mut self, session: &mut C, prompt: &str) -> Result<Option<String>> {
        if let Some(line) = self.pending.pop_front() {
            log::trace!("queued: {}", line);
            return Ok(Some(line));
        }
        let console = session.console();
        console.write_str(prompt)?;
        console.read_line().map_err(JotError::ReadFailure)
    }

    fn diagnose(&self, session: &mut C, msg: &str) -> Result<()> {
        let styled = (self.styler)(MessageLevel::Error, msg);
        session.console().write_block(&styled)?;
        Ok(())
    }

    fn run_exit_hooks(&mut self, session: &mut C) -> Result<()> {
        let mut hooks = std::mem::take(&mut self.on_exit);
        let mut outcome = Ok(());
        for hook in hooks.iter_mut() {
            let reply = match hook {
                ExitHook::Callback(f) => f(session).map(Some),
                ExitHook::Command(line) => self.execute(session, line),
            };
            let written = reply.and_then(|reply| match reply {
                Some(reply) => session.console().write_block(reply.text()).map_err(Into::into),
                None => Ok(()),
            });
            if let Err(e) = written {
                outcome = Err(e);
                break;
            }
        }
        self.on_exit = hooks;
        outcome
    }
}

/// Splits a trimmed line at the first whitespace run.
fn split_command(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => {
            let rest = rest.trim();
            (name, if rest.is_empty() { None } else { Some(rest) })
        }
        None => (line, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemWriter;
    use std::io::{self, BufReader, Cursor, Read};

    struct Session {
        console: Console,
        calls: Vec<String>,
    }

    impl Terminal for Session {
        fn console(&mut self) -> &mut Console {
            &mut self.console
        }
    }

    fn session(input: &str) -> (Session, MemWriter) {
        let out = MemWriter::new();
        let console = Console::new(Cursor::new(input.to_string()), out.clone());
        (
            Session {
                console,
                calls: Vec::new(),
            },
            out,
        )
    }

    fn interpreter() -> Interpreter<Session> {
        let mut interp = Interpreter::new();
        interp.add("ls", "list keys", |s: &mut Session| {
            s.calls.push("ls".into());
            Ok(Reply::output("a.json\nb.json\n"))
        });
        interp.add_with_arg("show", "show one", |s: &mut Session, arg: &str| {
            s.calls.push(format!("show {}", arg));
            Ok(Reply::output(format!("[{}]", arg)))
        });
        interp
    }

    #[test]
    fn split_command_separates_first_word() {
        assert_eq!(split_command("ls"), ("ls", None));
        assert_eq!(split_command("show  a b "), ("show", Some("a b")));
        assert_eq!(split_command("new\tx.json"), ("new", Some("x.json")));
    }

    #[test]
    fn no_arg_command_rejects_argument() {
        let (mut s, out) = session("ls extra\nexit\n");
        let mut interp = interpreter();

        assert_eq!(interp.run(&mut s, "> ").unwrap(), RunOutcome::Exited);
        assert!(s.calls.is_empty());
        assert!(out
            .contents()
            .contains("invalid subcommand: argument \"extra\" not accepted by \"ls\""));
    }

    #[test]
    fn one_arg_command_requires_argument() {
        let (mut s, out) = session("show\nshow   a.json  \nexit\n");
        let mut interp = interpreter();

        interp.run(&mut s, "> ").unwrap();
        assert_eq!(s.calls, vec!["show a.json"]);
        let text = out.contents();
        assert!(text.contains("invalid subcommand: argument required by \"show\""));
        assert!(text.contains("[a.json]\n"));
    }

    #[test]
    fn both_forms_pick_by_argument() {
        let (mut s, _) = session("new\nnew x\nexit\n");
        let mut interp = interpreter();
        interp.add("new", "new document", |s: &mut Session| {
            s.calls.push("new".into());
            Ok(Reply::output(""))
        });
        interp.add_with_arg("new", "", |s: &mut Session, arg: &str| {
            s.calls.push(format!("new {}", arg));
            Ok(Reply::output(""))
        });

        interp.run(&mut s, "> ").unwrap();
        assert_eq!(s.calls, vec!["new", "new x"]);
    }

    #[test]
    fn unknown_and_empty_lines_do_not_stop_the_loop() {
        let (mut s, out) = session("\n   \nbogus\nls\nexit\n");
        let mut interp = interpreter();

        assert_eq!(interp.run(&mut s, "> ").unwrap(), RunOutcome::Exited);
        assert_eq!(s.calls, vec!["ls"]);
        assert!(out.contents().contains("invalid subcommand: \"bogus\"\n"));
    }

    #[test]
    fn queued_lines_run_before_live_input() {
        let (mut s, out) = session("ls\n");
        let mut interp = interpreter();
        interp.enqueue(["help", "exit"]);
        interp.on_exit(|s: &mut Session| {
            s.calls.push("hook 1".into());
            Ok(Reply::output("first hook"))
        });
        interp.on_exit(|s: &mut Session| {
            s.calls.push("hook 2".into());
            Ok(Reply::output("second hook"))
        });

        assert_eq!(interp.run(&mut s, "> ").unwrap(), RunOutcome::Exited);
        assert_eq!(interp.pending(), 0);
        assert_eq!(s.calls, vec!["hook 1", "hook 2"]);

        let text = out.contents();
        assert!(!text.contains("> "), "no prompt for queued lines");
        assert!(text.starts_with("list commands:\n"));
        let first = text.find("first hook").unwrap();
        let second = text.find("second hook").unwrap();
        assert!(first < second);

        // The live line was never consumed.
        assert_eq!(s.console.read_line().unwrap().as_deref(), Some("ls"));
    }

    #[test]
    fn exit_text_precedes_hook_output() {
        let (mut s, out) = session("");
        let mut interp = interpreter();
        interp.add("quit", "quit with message", |_: &mut Session| Ok(Reply::exit("bye")));
        interp.on_exit_command("ls");
        interp.enqueue(["quit"]);

        interp.run(&mut s, "> ").unwrap();
        assert_eq!(out.contents(), "bye\na.json\nb.json\n");
        assert_eq!(s.calls, vec!["ls"]);
    }

    #[test]
    fn end_of_input_skips_exit_hooks() {
        let (mut s, out) = session("ls\n");
        let mut interp = interpreter();
        interp.on_exit(|s: &mut Session| {
            s.calls.push("hook".into());
            Ok(Reply::output(""))
        });

        assert_eq!(interp.run(&mut s, "> ").unwrap(), RunOutcome::EndOfInput);
        assert_eq!(s.calls, vec!["ls"]);
        assert_eq!(out.contents(), "> a.json\nb.json\n> ");
    }

    #[test]
    fn handler_error_ends_the_loop() {
        let (mut s, _) = session("fail\nls\nexit\n");
        let mut interp = interpreter();
        interp.add("fail", "always fails", |_: &mut Session| {
            Err(JotError::NotFound("x.json".into()))
        });
        interp.on_exit(|s: &mut Session| {
            s.calls.push("hook".into());
            Ok(Reply::output(""))
        });

        let err = interp.run(&mut s, "> ").unwrap_err();
        assert!(matches!(err, JotError::NotFound(_)));
        assert!(s.calls.is_empty());
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn read_errors_become_read_failure() {
        let out = MemWriter::new();
        let mut s = Session {
            console: Console::new(BufReader::new(Broken), out),
            calls: Vec::new(),
        };
        let mut interp = interpreter();
        assert!(matches!(
            interp.run(&mut s, "> "),
            Err(JotError::ReadFailure(_))
        ));
    }

    #[test]
    fn exit_alias_and_help_listing() {
        let (mut s, out) = session("help\n:q\n");
        let mut interp = interpreter();
        interp.add_exit_alias(":q");

        assert_eq!(interp.run(&mut s, "> ").unwrap(), RunOutcome::Exited);
        let text = out.contents();
        for name in [":q", "exit", "help", "ls", "show"] {
            assert!(text.contains(&format!("\t{}\n", name)), "missing {}", name);
        }
    }

    #[test]
    fn styler_wraps_diagnostics() {
        fn shout(_: MessageLevel, text: &str) -> String {
            format!("!! {}", text)
        }
        let (mut s, out) = session("nope\nexit\n");
        let mut interp = interpreter().with_styler(shout);
        interp.run(&mut s, "").unwrap();
        assert_eq!(out.contents(), "!! invalid subcommand: \"nope\"\n");
    }
}
