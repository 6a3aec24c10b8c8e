use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Error;

/// The markdown corpus: every document discovered under the root, in scan
/// order, with O(log n) membership lookup for the resolver.
///
/// Scan order is whatever the directory traversal yields. The bare-name
/// resolution fallback takes the first match in this order, so duplicate
/// base names resolve traversal-order-dependently. Known limitation.
pub struct Corpus {
    /// Document identities relative to the root, in scan order.
    docs: Vec<PathBuf>,
    /// Absolute corpus root.
    root: PathBuf,
    /// Same identities as `docs`, for membership checks.
    set: BTreeSet<PathBuf>,
}

impl Corpus {
    /// Whether a root-relative path is a discovered document.
    pub fn contains(&self, relative: &Path) -> bool {
        self.set.contains(relative)
    }

    /// Walk `root` and collect every markdown document, skipping hidden
    /// (dot-prefixed) directories and files.
    ///
    /// # Errors
    ///
    /// Returns `Error::RootNotFound` if `root` is not an existing directory.
    /// Traversal errors on individual entries are skipped, not fatal.
    pub fn discover(root: &Path) -> Result<Self, Error> {
        if !root.is_dir() {
            return Err(Error::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut docs = Vec::new();
        for entry in WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        {
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            docs.push(relative);
        }

        let set = docs.iter().cloned().collect();
        Ok(Self {
            docs,
            root: root.to_path_buf(),
            set,
        })
    }

    /// Document identities in scan order.
    pub fn docs(&self) -> &[PathBuf] {
        &self.docs
    }

    /// Read one document's raw text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O or decoding error; callers treat this as
    /// a per-document recoverable condition, not a fatal one.
    pub fn read(&self, relative: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(self.root.join(relative))
    }

    /// Absolute corpus root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Dot-prefixed entries hold editor and VCS state, never documents.
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "x").unwrap();
    }

    #[test]
    fn finds_markdown_recursively() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("A.md"));
        touch(&dir.path().join("sub/B.md"));
        touch(&dir.path().join("sub/notes.txt"));

        let corpus = Corpus::discover(dir.path()).unwrap();
        assert_eq!(corpus.docs().len(), 2);
        assert!(corpus.contains(Path::new("A.md")));
        assert!(corpus.contains(Path::new("sub/B.md")));
        assert!(!corpus.contains(Path::new("sub/notes.txt")));
    }

    #[test]
    fn hidden_directories_are_excluded() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("A.md"));
        touch(&dir.path().join(".obsidian/cache.md"));
        touch(&dir.path().join(".git/HEAD.md"));

        let corpus = Corpus::discover(dir.path()).unwrap();
        assert_eq!(corpus.docs(), [PathBuf::from("A.md")]);
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(matches!(
            Corpus::discover(&gone),
            Err(Error::RootNotFound { .. })
        ));
    }
}
