use super::helpers::normalize_key;
use crate::commands::{CmdMessage, CmdResult, ListedDocument};
use crate::error::{JotError, Result};
use crate::model::Document;
use crate::store::DocumentCache;

/// Adds a new, unsaved document under `name`.
pub fn run(
    cache: &mut DocumentCache,
    name: &str,
    title: &str,
    content: Vec<String>,
    overridable: bool,
) -> Result<CmdResult> {
    let key = normalize_key(name);
    if key.is_empty() {
        return Ok(CmdResult::failed(JotError::InvalidName(name.to_string())));
    }

    let mut doc = match Document::new(&key, overridable) {
        Ok(doc) => doc,
        Err(e) => return Ok(CmdResult::failed(e)),
    };
    doc.title = title.to_string();
    doc.content = content;

    let key = match cache.insert(doc) {
        Ok(key) => key,
        Err(e) => return Ok(CmdResult::failed(e)),
    };
    let listed = cache
        .get(&key)
        .map(|doc| vec![ListedDocument::new(&key, doc)])
        .unwrap_or_default();
    Ok(CmdResult::default()
        .with_listed(listed)
        .with_message(CmdMessage::success(format!("new document key: {}", key))))
}
