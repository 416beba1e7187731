//! Compiled line patterns
//!
//! Patterns are compiled and validated once, before any file is read,
//! so a typo in the configuration never produces a half-finished run.

use regex::{Captures, Regex};

use crate::config::AuthorityKind;
use crate::lint::error::LintError;
use crate::version::triple::VersionTriple;

/// Pattern for target lines: three groups for major, minor and patch
#[derive(Debug, Clone)]
pub struct TriplePattern {
    re: Regex,
}

impl TriplePattern {
    pub fn new(pattern: &str) -> Result<Self, LintError> {
        Ok(Self {
            re: compile(pattern, 3)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }

    /// Match a single line.
    ///
    /// Returns None if the line does not match; `Some(None)` if it matches
    /// but a captured number does not fit in a `u64`.
    pub fn match_line(&self, line: &str) -> Option<Option<VersionTriple>> {
        let caps = self.re.captures(line)?;
        Some(VersionTriple::from_parts(
            group(&caps, 1),
            group(&caps, 2),
            group(&caps, 3),
        ))
    }
}

/// Pattern for the authority file
#[derive(Debug, Clone)]
pub enum AuthorityPattern {
    /// Whole version on one line: groups are major, minor, patch
    Triple(TriplePattern),
    /// One component per line: groups are the component label and its number
    Components(Regex),
}

impl AuthorityPattern {
    pub fn new(kind: AuthorityKind, pattern: &str) -> Result<Self, LintError> {
        match kind {
            AuthorityKind::Triple => TriplePattern::new(pattern).map(AuthorityPattern::Triple),
            AuthorityKind::Components => compile(pattern, 2).map(AuthorityPattern::Components),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AuthorityPattern::Triple(pattern) => pattern.as_str(),
            AuthorityPattern::Components(re) => re.as_str(),
        }
    }
}

fn compile(pattern: &str, groups: usize) -> Result<Regex, LintError> {
    let re = Regex::new(pattern).map_err(|source| LintError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    // captures_len counts the implicit whole-match group
    let found = re.captures_len() - 1;
    if found != groups {
        return Err(LintError::CaptureGroups {
            pattern: pattern.to_string(),
            expected: groups,
            found,
        });
    }

    Ok(re)
}

/// Text of a capture group, empty if the group did not participate
pub(crate) fn group<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}
