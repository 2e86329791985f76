// SPDX-License-Identifier: Apache-2.0

//! Filesystem helpers: directory creation and file size reporting.

use crate::domain::{Result, UtilError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Creates each directory in `paths`, including missing parents.
///
/// Idempotent: directories that already exist are not an error. When
/// `verbose` is true, logs one info event per directory.
///
/// # Examples
///
/// ```no_run
/// use pipekit::ops::ensure_directories;
///
/// # fn main() -> pipekit::domain::Result<()> {
/// ensure_directories(&["artifacts/data", "artifacts/models"], true)?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_directories<P: AsRef<Path>>(paths: &[P], verbose: bool) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        if verbose {
            tracing::info!("Created directory at: {}", path.display());
        }
    }
    Ok(())
}

/// Returns a file's size on disk, rounded to the nearest whole kilobyte and
/// formatted as `"~ {N} KB"`.
///
/// Rounds half away from zero, so a 1536-byte file reports `"~ 2 KB"`.
/// Fails with [`UtilError::NotFound`] if the file does not exist.
pub fn file_size_kb<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            UtilError::not_found(path.display().to_string())
        } else {
            UtilError::Io(e)
        }
    })?;

    let size_in_kb = (metadata.len() as f64 / 1024.0).round() as u64;
    Ok(format!("~ {} KB", size_in_kb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_directories_creates_nested_paths() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("artifacts/data/train");
        let b = dir.path().join("artifacts/models");

        ensure_directories(&[&a, &b], true).unwrap();
        assert!(a.is_dir());
        assert!(b.is_dir());
    }

    #[test]
    fn test_ensure_directories_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("artifacts");

        ensure_directories(&[&path], false).unwrap();
        ensure_directories(&[&path], false).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn test_file_size_exact_kilobytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, vec![0u8; 2048]).unwrap();

        assert_eq!(file_size_kb(&path).unwrap(), "~ 2 KB");
    }

    #[test]
    fn test_file_size_rounds_half_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, vec![0u8; 1536]).unwrap();

        assert_eq!(file_size_kb(&path).unwrap(), "~ 2 KB");
    }

    #[test]
    fn test_file_size_rounds_down_below_half() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, vec![0u8; 1400]).unwrap();

        assert_eq!(file_size_kb(&path).unwrap(), "~ 1 KB");
    }

    #[test]
    fn test_file_size_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        assert_eq!(file_size_kb(&path).unwrap(), "~ 0 KB");
    }

    #[test]
    fn test_file_size_missing_file_is_not_found() {
        let result = file_size_kb("/nonexistent/path/data.bin");
        assert!(matches!(result, Err(UtilError::NotFound { .. })));
    }
}
