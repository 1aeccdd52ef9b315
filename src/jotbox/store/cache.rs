use super::walk::{discover, relative_key};
use super::WriteReport;
use crate::error::{JotError, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// In-memory index of every document below a root directory.
#[derive(Debug)]
pub struct DocumentCache {
    root: PathBuf,
    index: HashMap<String, Document>,
}

impl DocumentCache {
    /// Opens a cache on an absolute, existing directory and scans it.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        if !root.is_absolute() || !root.is_dir() {
            return Err(JotError::InvalidRoot(root));
        }
        let mut cache = Self {
            root,
            index: HashMap::new(),
        };
        cache.rescan()?;
        Ok(cache)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walks the root again. Known keys are reloaded in place (their
    /// `overridable` flag survives), new files are added as overridable.
    pub fn rescan(&mut self) -> Result<()> {
        let paths = discover(&self.root)?;
        let mut added = 0usize;
        for path in paths {
            let Some(key) = relative_key(&self.root, &path) else {
                continue;
            };
            if let Some(doc) = self.index.get_mut(&key) {
                doc.load()?;
                continue;
            }
            let mut doc = Document::new(path, true)?;
            doc.load()?;
            self.index.insert(key, doc);
            added += 1;
        }
        log::debug!(
            "rescan of {}: {} documents, {} new",
            self.root.display(),
            self.index.len(),
            added
        );
        Ok(())
    }

    /// Adds a brand-new document. Relative document paths are anchored at the
    /// root; a key that is already cached is rejected.
    pub fn insert(&mut self, mut doc: Document) -> Result<String> {
        let path = if doc.path().is_absolute() {
            doc.path().to_path_buf()
        } else {
            self.root.join(doc.path())
        };
        let key = relative_key(&self.root, &path)
            .ok_or_else(|| JotError::InvalidName(path.display().to_string()))?;
        if self.index.contains_key(&key) {
            return Err(JotError::DuplicateKey(key));
        }
        doc.set_path(self.root.join(&key));
        log::debug!("inserted {}", key);
        self.index.insert(key.clone(), doc);
        Ok(key)
    }

    pub fn get(&self, key: &str) -> Option<&Document> {
        self.index.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Document> {
        self.index.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Absolute path of the document cached under `key`.
    pub fn resolve(&self, key: &str) -> Result<PathBuf> {
        self.index
            .get(key)
            .map(|doc| doc.path().to_path_buf())
            .ok_or_else(|| JotError::NotFound(key.to_string()))
    }

    /// Evicts `key` from the index. The backing file is left alone.
    pub fn remove(&mut self, key: &str) -> Option<Document> {
        self.index.remove(key)
    }

    /// Deletes the backing file, then evicts the key. If the file cannot be
    /// removed the index is left untouched.
    pub fn delete(&mut self, key: &str) -> Result<PathBuf> {
        let path = self.resolve(key)?;
        fs::remove_file(&path)?;
        self.index.remove(key);
        log::debug!("deleted {}", path.display());
        Ok(path)
    }

    /// Saves every document. Failures are collected, the pass continues.
    pub fn write_all(&self) -> WriteReport {
        let mut report = WriteReport::default();
        for (key, doc) in self.iter() {
            match doc.save() {
                Ok(()) => report.written.push(key.to_string()),
                Err(e) => {
                    log::warn!("write of {} failed: {}", key, e);
                    report.failures.push((key.to_string(), e));
                }
            }
        }
        report
    }

    /// Cached keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.index.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Documents in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Document)> {
        let mut entries: Vec<(&str, &Document)> = self
            .index
            .iter()
            .map(|(key, doc)| (key.as_str(), doc))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
