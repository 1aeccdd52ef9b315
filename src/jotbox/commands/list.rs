use crate::commands::{CmdMessage, CmdResult, ListedDocument};
use crate::error::Result;
use crate::store::DocumentCache;

/// Cached keys, sorted.
pub fn run(cache: &DocumentCache) -> Result<CmdResult> {
    let keys: Vec<String> = cache.keys().into_iter().map(str::to_string).collect();
    let mut result = CmdResult::default();
    if keys.is_empty() {
        result.add_message(CmdMessage::info("No documents cached."));
    }
    Ok(result.with_keys(keys))
}

/// Every cached document with its title and content.
pub fn run_all(cache: &DocumentCache) -> Result<CmdResult> {
    let listed: Vec<ListedDocument> = cache
        .iter()
        .map(|(key, doc)| ListedDocument::new(key, doc))
        .collect();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No documents cached."));
    }
    Ok(result.with_listed(listed))
}
