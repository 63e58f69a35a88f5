//! Site build error types.

use std::path::{Path, PathBuf};

use mdsite_renderer::{ConvertError, MissingTitleError};

/// Error returned by site generation.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Required source directory does not exist.
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Page destination exists and is a directory.
    #[error("Destination is a directory, not a file: {}", .0.display())]
    DestinationIsDirectory(PathBuf),

    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Markdown page has no `# ` title.
    #[error("{}: {source}", .path.display())]
    Title {
        /// Markdown source file.
        path: PathBuf,
        /// Underlying error.
        source: MissingTitleError,
    },

    /// Markdown page failed to convert.
    #[error("{}: {source}", .path.display())]
    Render {
        /// Markdown source file.
        path: PathBuf,
        /// Underlying error.
        source: ConvertError,
    },
}

/// Attach a path to I/O results.
pub(crate) trait IoResultExt<T> {
    fn at(self, path: &Path) -> Result<T, BuildError>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at(self, path: &Path) -> Result<T, BuildError> {
        self.map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
