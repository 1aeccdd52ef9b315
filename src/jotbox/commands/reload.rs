use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentCache;

/// Rescans the root, picking up edits made outside the session.
pub fn run(cache: &mut DocumentCache) -> Result<CmdResult> {
    if let Err(e) = cache.rescan() {
        return Ok(CmdResult::failed(e));
    }
    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "{} documents cached from {}",
        cache.len(),
        cache.root().display()
    ))))
}
