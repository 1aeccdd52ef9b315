use super::helpers::normalize_key;
use crate::commands::{CmdResult, ListedDocument};
use crate::error::{JotError, Result};
use crate::store::DocumentCache;

pub fn run(cache: &DocumentCache, name: &str) -> Result<CmdResult> {
    let key = normalize_key(name);
    match cache.get(&key) {
        Some(doc) => Ok(CmdResult::default().with_listed(vec![ListedDocument::new(&key, doc)])),
        None => Ok(CmdResult::failed(JotError::NotFound(key))),
    }
}
