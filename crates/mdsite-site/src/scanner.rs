//! Markdown page discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, IoResultExt};

/// A markdown source and the HTML file it renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRef {
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Discover every markdown page under `content_dir`, sorted by source path.
///
/// # Errors
///
/// Returns [`BuildError::SourceNotFound`] if `content_dir` does not exist.
pub fn discover_pages(content_dir: &Path, public_dir: &Path) -> Result<Vec<PageRef>, BuildError> {
    Scanner::new(content_dir, public_dir).scan()
}

/// Finds `.md` files under a content directory and maps them to output paths.
///
/// `content/blog/post.md` maps to `public/blog/post.html`. Hidden files and
/// directories are skipped.
pub(crate) struct Scanner {
    content_dir: PathBuf,
    public_dir: PathBuf,
}

impl Scanner {
    pub(crate) fn new(content_dir: impl Into<PathBuf>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            public_dir: public_dir.into(),
        }
    }

    /// Walk the content directory. Results are sorted by source path.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SourceNotFound`] if the content directory does
    /// not exist.
    pub(crate) fn scan(&self) -> Result<Vec<PageRef>, BuildError> {
        if !self.content_dir.is_dir() {
            return Err(BuildError::SourceNotFound(self.content_dir.clone()));
        }
        let mut refs = Vec::new();
        self.scan_directory(&self.content_dir, &self.public_dir, &mut refs)?;
        refs.sort_by(|a, b| a.source.cmp(&b.source));
        Ok(refs)
    }

    fn scan_directory(
        &self,
        dir: &Path,
        out_dir: &Path,
        refs: &mut Vec<PageRef>,
    ) -> Result<(), BuildError> {
        for entry in fs::read_dir(dir).at(dir)? {
            let entry = entry.at(dir)?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            if path.is_dir() {
                self.scan_directory(&path, &out_dir.join(&name), refs)?;
            } else if path.extension().is_some_and(|e| e == "md") {
                let dest = out_dir.join(&name).with_extension("html");
                refs.push(PageRef { source: path, dest });
            }
        }
        Ok(())
    }
}
