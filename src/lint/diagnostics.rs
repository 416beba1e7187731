//! Diagnostics produced by version checking

use std::fmt;
use std::path::PathBuf;

use crate::version::triple::AuthorityVersion;

/// A version problem found in a target file.
///
/// Diagnostics never abort a run; they are collected in discovery order
/// and the run fails if any were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A matching line carries a different version than the authority
    VersionMismatch {
        file: PathBuf,
        /// The offending line, trimmed
        line: String,
        /// 1-indexed line number
        line_number: usize,
        expected: AuthorityVersion,
    },
    /// The pattern matched a different number of lines than configured
    CountMismatch {
        file: PathBuf,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::VersionMismatch {
                file,
                line,
                expected,
                ..
            } => write!(
                f,
                "ERROR in {}: got '{}' but version should be '{}'",
                file.display(),
                line,
                expected
            ),
            Diagnostic::CountMismatch {
                file,
                expected,
                found,
            } => write!(
                f,
                "ERROR in {}: expected {} occurrences but found it {} times",
                file.display(),
                expected,
                found
            ),
        }
    }
}
