use crate::error::{JotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension every document file must carry.
pub const DOC_EXT: &str = ".json";

/// On-disk shape of a document. Unknown fields are ignored when reading.
#[derive(Debug, Default, Deserialize)]
struct DocumentFile {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: Vec<String>,
}

#[derive(Serialize)]
struct DocumentFileRef<'a> {
    title: &'a str,
    content: &'a [String],
}

/// A single JSON-backed note: a title plus ordered content lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub content: Vec<String>,
    path: PathBuf,
    overridable: bool,
}

/// Returns true when the file name of `path` ends with [`DOC_EXT`].
pub fn has_doc_ext(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(DOC_EXT))
}

/// Appends [`DOC_EXT`] to `name` unless it is already there.
pub fn with_doc_ext(name: &str) -> String {
    if name.ends_with(DOC_EXT) {
        name.to_string()
    } else {
        format!("{}{}", name, DOC_EXT)
    }
}

impl Document {
    /// Creates an empty document bound to `path`.
    ///
    /// Fails with [`JotError::InvalidName`] unless the file name ends in `.json`.
    pub fn new<P: Into<PathBuf>>(path: P, overridable: bool) -> Result<Self> {
        let path = path.into();
        if !has_doc_ext(&path) {
            return Err(JotError::InvalidName(path.display().to_string()));
        }
        Ok(Self {
            title: String::new(),
            content: Vec::new(),
            path,
            overridable,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-anchors a relative path; used by the cache when inserting.
    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }

    pub fn is_overridable(&self) -> bool {
        self.overridable
    }

    pub fn set_overridable(&mut self, overridable: bool) {
        self.overridable = overridable;
    }

    pub fn base_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    pub fn push_line<S: Into<String>>(&mut self, line: S) {
        self.content.push(line.into());
    }

    /// Removes the line at `index` (0-based), keeping the order of the rest.
    pub fn remove_line(&mut self, index: usize) -> Option<String> {
        if index < self.content.len() {
            Some(self.content.remove(index))
        } else {
            None
        }
    }

    /// Replaces title and content with what is stored at `path`.
    pub fn load(&mut self) -> Result<()> {
        let raw = fs::read_to_string(&self.path)?;
        let file: DocumentFile = serde_json::from_str(&raw)?;
        self.title = file.title;
        self.content = file.content;
        log::trace!("loaded {}", self.path.display());
        Ok(())
    }

    /// Checks that the path is usable as a write target: correct extension and
    /// either absent or a regular file.
    pub fn validate_path(&self) -> Result<()> {
        if !has_doc_ext(&self.path) {
            return Err(JotError::InvalidName(self.path.display().to_string()));
        }
        match fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(JotError::InvalidName(self.path.display().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JotError::Io(e)),
        }
    }

    /// Writes the document, refusing to replace an existing file unless the
    /// document is overridable.
    pub fn save(&self) -> Result<()> {
        self.validate_path()?;
        if self.path.exists() && !self.overridable {
            return Err(JotError::AlreadyExists(self.path.clone()));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&DocumentFileRef {
            title: &self.title,
            content: &self.content,
        })?;
        write_private(&self.path, json.as_bytes())?;
        log::debug!("saved {}", self.path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(bytes)
}

#[cfg(not(unix))]
fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)
}
