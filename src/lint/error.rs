use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a lint run.
///
/// Version problems found in files are not errors; they are reported
/// as [`Diagnostic`](crate::lint::diagnostics::Diagnostic)s.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern '{pattern}' must have {expected} capture groups, found {found}")]
    CaptureGroups {
        pattern: String,
        expected: usize,
        found: usize,
    },

    #[error("Unknown version component '{label}' in {}", path.display())]
    UnknownComponent { path: PathBuf, label: String },
}
