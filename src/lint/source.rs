//! Access to the contents of checked files

use std::path::Path;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::lint::error::LintError;

/// Trait for loading the text of a file by path
#[cfg_attr(test, automock)]
pub trait ContentSource {
    /// Read the whole file. The file is closed before this returns.
    fn read(&self, path: &Path) -> Result<String, LintError>;
}

/// Reads files from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn read(&self, path: &Path) -> Result<String, LintError> {
        debug!("Reading {}", path.display());
        std::fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fs_source_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "  v4.2.0\n").unwrap();

        assert_eq!(FsSource.read(&path).unwrap(), "  v4.2.0\n");
    }

    #[test]
    fn fs_source_reports_missing_file_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.html");

        let err = FsSource.read(&path).unwrap_err();

        assert!(matches!(&err, LintError::Io { path: p, .. } if p == &path));
        assert!(err.to_string().contains("missing.html"));
    }
}
