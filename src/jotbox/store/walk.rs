use crate::error::Result;
use crate::model::has_doc_ext;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Collects every regular `*.json` file below `root`, descending into all
/// subdirectories.
pub(super) fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() && has_doc_ext(entry.path()) {
            found.push(entry.into_path());
        }
    }
    log::trace!("discovered {} documents below {}", found.len(), root.display());
    Ok(found)
}

/// Root-relative key for `path`, joined with `/`.
///
/// Returns `None` when `path` is not below `root` or climbs out with `..`.
pub(super) fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
