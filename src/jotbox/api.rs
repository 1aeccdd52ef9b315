//! # API Facade
//!
//! [`JotApi`] owns the [`DocumentCache`] and exposes one method per command.
//! It holds no business logic of its own: every method forwards to
//! `commands::<name>` and hands back the resulting [`CmdResult`].
//!
//! Front ends (the interactive shell, batch mode, tests) talk to the cache
//! only through this type.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::DocumentCache;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct JotApi {
    cache: DocumentCache,
}

impl JotApi {
    pub fn new(cache: DocumentCache) -> Self {
        Self { cache }
    }

    /// Opens a cache on `root` and wraps it.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        Ok(Self::new(DocumentCache::open(root)?))
    }

    pub fn root(&self) -> &Path {
        self.cache.root()
    }

    pub fn list_keys(&self) -> Result<CmdResult> {
        commands::list::run(&self.cache)
    }

    pub fn list_documents(&self) -> Result<CmdResult> {
        commands::list::run_all(&self.cache)
    }

    pub fn show(&self, name: &str) -> Result<CmdResult> {
        commands::show::run(&self.cache, name)
    }

    pub fn create(
        &mut self,
        name: &str,
        title: &str,
        content: Vec<String>,
        overridable: bool,
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.cache, name, title, content, overridable)
    }

    pub fn remove(&mut self, name: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.cache, name)
    }

    pub fn write_all(&self) -> Result<CmdResult> {
        commands::write::run(&self.cache)
    }

    pub fn state(&self) -> Result<CmdResult> {
        commands::state::run(&self.cache)
    }

    pub fn reload(&mut self) -> Result<CmdResult> {
        commands::reload::run(&mut self.cache)
    }

    pub fn change_root(&mut self, target: &str) -> Result<CmdResult> {
        commands::cd::run(&mut self.cache, target)
    }

    pub fn todo_add(&mut self, text: &str) -> Result<CmdResult> {
        commands::todo::add(&mut self.cache, text)
    }

    pub fn todo_list(&self) -> Result<CmdResult> {
        commands::todo::list(&self.cache)
    }

    pub fn todo_done(&mut self, number: &str) -> Result<CmdResult> {
        commands::todo::done(&mut self.cache, number)
    }
}
