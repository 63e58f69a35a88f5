//! Recursive static asset copy.

use std::fs;
use std::path::Path;

use crate::error::{BuildError, IoResultExt};

/// Recursively copy `source` into `dest`, creating `dest` as needed.
///
/// Symlinks are followed. Returns the number of files copied.
///
/// # Errors
///
/// Returns [`BuildError::SourceNotFound`] if `source` does not exist and
/// [`BuildError::Io`] if any entry cannot be read or written.
pub fn copy_static(source: &Path, dest: &Path) -> Result<usize, BuildError> {
    if !source.exists() {
        return Err(BuildError::SourceNotFound(source.to_path_buf()));
    }
    fs::create_dir_all(dest).at(dest)?;

    let mut copied = 0;
    for entry in fs::read_dir(source).at(source)? {
        let entry = entry.at(source)?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copied += copy_static(&from, &to)?;
        } else if from.is_file() {
            fs::copy(&from, &to).at(&from)?;
            tracing::debug!(from = %from.display(), to = %to.display(), "Copied static file");
            copied += 1;
        }
    }
    Ok(copied)
}
