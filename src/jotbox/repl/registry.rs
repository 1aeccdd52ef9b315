use super::Reply;
use crate::error::Result;
use std::collections::HashMap;

pub type NoArgHandler<C> = Box<dyn FnMut(&mut C) -> Result<Reply>>;
pub type OneArgHandler<C> = Box<dyn FnMut(&mut C, &str) -> Result<Reply>>;

/// The handler forms a command name can carry.
pub enum Handler<C> {
    NoArg(NoArgHandler<C>),
    OneArg(OneArgHandler<C>),
    Both(NoArgHandler<C>, OneArgHandler<C>),
}

/// Which form fires for a given command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    NoArg,
    OneArg,
    /// The line has an argument but only the no-arg form exists.
    UnexpectedArgument,
    /// The line has no argument but only the one-arg form exists.
    MissingArgument,
}

impl<C> Handler<C> {
    pub fn route(&self, has_argument: bool) -> Route {
        match (self, has_argument) {
            (Handler::NoArg(_), false) | (Handler::Both(..), false) => Route::NoArg,
            (Handler::OneArg(_), true) | (Handler::Both(..), true) => Route::OneArg,
            (Handler::NoArg(_), true) => Route::UnexpectedArgument,
            (Handler::OneArg(_), false) => Route::MissingArgument,
        }
    }

    /// Invokes the form matching `argument`; `None` when that form is absent.
    pub fn call(&mut self, session: &mut C, argument: Option<&str>) -> Option<Result<Reply>> {
        match (self, argument) {
            (Handler::NoArg(f), None) | (Handler::Both(f, _), None) => Some(f(session)),
            (Handler::OneArg(g), Some(arg)) | (Handler::Both(_, g), Some(arg)) => {
                Some(g(session, arg))
            }
            _ => None,
        }
    }

    /// Combines an existing entry with a newly registered one. A form present
    /// in `other` replaces the same form in `self`; the other form survives.
    fn merge(self, other: Handler<C>) -> Handler<C> {
        match (self, other) {
            (_, Handler::Both(f, g)) => Handler::Both(f, g),
            (Handler::NoArg(_), Handler::NoArg(f)) => Handler::NoArg(f),
            (Handler::OneArg(_), Handler::OneArg(g)) => Handler::OneArg(g),
            (Handler::NoArg(f), Handler::OneArg(g)) => Handler::Both(f, g),
            (Handler::OneArg(g), Handler::NoArg(f)) => Handler::Both(f, g),
            (Handler::Both(_, g), Handler::NoArg(f)) => Handler::Both(f, g),
            (Handler::Both(f, _), Handler::OneArg(g)) => Handler::Both(f, g),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Handler::NoArg(_) => "no-arg",
            Handler::OneArg(_) => "one-arg",
            Handler::Both(..) => "no-arg+one-arg",
        }
    }
}

/// Commands the interpreter answers itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Help,
}

enum Action<C> {
    Builtin(Builtin),
    Handler(Handler<C>),
}

struct Entry<C> {
    action: Action<C>,
    help: String,
}

/// Name to command mapping.
pub struct Registry<C> {
    entries: HashMap<String, Entry<C>>,
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<C> Registry<C> {
    /// A registry holding only `exit` and `help`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        registry.register_builtin("exit", Builtin::Exit, "call exit");
        registry.register_builtin("help", Builtin::Help, "show subcommands");
        registry
    }

    pub fn register_builtin(&mut self, name: &str, builtin: Builtin, help: &str) {
        self.entries.insert(
            name.to_string(),
            Entry {
                action: Action::Builtin(builtin),
                help: help.to_string(),
            },
        );
    }

    /// Upserts `handler` under `name`. Forms already registered for `name`
    /// are kept unless `handler` supplies the same form; an empty `help`
    /// keeps the previous text.
    pub fn register(&mut self, name: &str, handler: Handler<C>, help: &str) {
        let entry = match self.entries.remove(name) {
            Some(Entry {
                action: Action::Handler(existing),
                help: old_help,
            }) => Entry {
                action: Action::Handler(existing.merge(handler)),
                help: if help.is_empty() { old_help } else { help.to_string() },
            },
            Some(Entry {
                action: Action::Builtin(_),
                help: old_help,
            }) => Entry {
                action: Action::Handler(handler),
                help: if help.is_empty() { old_help } else { help.to_string() },
            },
            None => Entry {
                action: Action::Handler(handler),
                help: help.to_string(),
            },
        };
        if let Action::Handler(h) = &entry.action {
            log::trace!("registered {} as {}", name, h.describe());
        }
        self.entries.insert(name.to_string(), entry);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub(super) fn builtin(&self, name: &str) -> Option<Builtin> {
        match self.entries.get(name)?.action {
            Action::Builtin(builtin) => Some(builtin),
            Action::Handler(_) => None,
        }
    }

    pub(super) fn handler_mut(&mut self, name: &str) -> Option<&mut Handler<C>> {
        match &mut self.entries.get_mut(name)?.action {
            Action::Handler(handler) => Some(handler),
            Action::Builtin(_) => None,
        }
    }

    /// Route a line with or without an argument would take, if `name` is a
    /// registered handler.
    pub fn route(&self, name: &str, has_argument: bool) -> Option<Route> {
        match &self.entries.get(name)?.action {
            Action::Handler(h) => Some(h.route(has_argument)),
            Action::Builtin(_) if has_argument => Some(Route::UnexpectedArgument),
            Action::Builtin(_) => Some(Route::NoArg),
        }
    }

    /// `(name, help)` pairs sorted by name.
    pub fn help_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.help.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn render_help(&self) -> String {
        let mut out = String::from("list commands:\n");
        for (name, help) in self.help_entries() {
            out.push_str(&format!("\t{}\n\t\t{}\n", name, help));
        }
        out
    }
}
