use super::helpers::normalize_key;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentCache;

/// Deletes the document's file and drops it from the cache.
pub fn run(cache: &mut DocumentCache, name: &str) -> Result<CmdResult> {
    let key = normalize_key(name);
    match cache.delete(&key) {
        Ok(path) => Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("{} is removed", path.display())))
            .with_paths(vec![path])),
        Err(e) => Ok(CmdResult::failed(e)),
    }
}
