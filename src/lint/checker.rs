//! Version consistency checking across target files

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LintConfig;
use crate::lint::authority::read_authority;
use crate::lint::diagnostics::Diagnostic;
use crate::lint::error::LintError;
use crate::lint::pattern::{AuthorityPattern, TriplePattern};
use crate::lint::source::ContentSource;
use crate::version::triple::{AuthorityVersion, VersionTriple};

/// A target file with its compiled pattern
#[derive(Debug, Clone)]
pub struct Target {
    pub path: PathBuf,
    pub pattern: TriplePattern,
    pub expected_count: usize,
}

/// A line in a target that matched its pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-indexed line number
    pub line_number: usize,
    /// The line, trimmed
    pub line: String,
    /// None if a captured number does not fit in a `u64`
    pub version: Option<VersionTriple>,
    pub matches_authority: bool,
}

/// Outcome of checking one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub path: PathBuf,
    pub expected_count: usize,
    pub matches: Vec<LineMatch>,
}

impl CheckResult {
    pub fn found_count(&self) -> usize {
        self.matches.len()
    }

    /// Diagnostics for this target, in line order, count last
    pub fn diagnostics(&self, authority: &AuthorityVersion) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = self
            .matches
            .iter()
            .filter(|m| !m.matches_authority)
            .map(|m| Diagnostic::VersionMismatch {
                file: self.path.clone(),
                line: m.line.clone(),
                line_number: m.line_number,
                expected: *authority,
            })
            .collect();

        if self.found_count() != self.expected_count {
            diagnostics.push(Diagnostic::CountMismatch {
                file: self.path.clone(),
                expected: self.expected_count,
                found: self.found_count(),
            });
        }

        diagnostics
    }
}

/// Result of a full run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub authority: AuthorityVersion,
    pub results: Vec<CheckResult>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Where the expected version comes from
#[derive(Debug, Clone)]
pub enum Authority {
    /// Read from a file
    File {
        path: PathBuf,
        pattern: AuthorityPattern,
    },
    /// Given directly, e.g. the version being released
    Fixed(VersionTriple),
}

/// A compiled lint configuration
#[derive(Debug, Clone)]
pub struct Checker {
    authority: Authority,
    targets: Vec<Target>,
}

impl Checker {
    /// Compile every pattern in the configuration.
    ///
    /// Fails on the first invalid pattern without touching the filesystem.
    pub fn from_config(config: &LintConfig) -> Result<Self, LintError> {
        let authority = Authority::File {
            path: config.authority.path.clone(),
            pattern: AuthorityPattern::new(config.authority.kind, &config.authority.pattern)?,
        };

        let targets = config
            .targets
            .iter()
            .map(|target| -> Result<Target, LintError> {
                Ok(Target {
                    path: target.path.clone(),
                    pattern: TriplePattern::new(&target.pattern)?,
                    expected_count: target.count,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { authority, targets })
    }

    /// Compare against a fixed version instead of reading the authority file
    pub fn with_expected(mut self, version: VersionTriple) -> Self {
        self.authority = Authority::Fixed(version);
        self
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Resolve the authority, then check every target in order.
    ///
    /// The first I/O error aborts the run.
    pub fn run(&self, source: &dyn ContentSource) -> Result<Report, LintError> {
        self.run_with(source, |_| {})
    }

    /// Like [`Checker::run`], but hands each diagnostic to `on_diagnostic`
    /// as soon as its target has been scanned, so diagnostics found before
    /// an I/O error are not lost.
    pub fn run_with(
        &self,
        source: &dyn ContentSource,
        on_diagnostic: impl FnMut(&Diagnostic),
    ) -> Result<Report, LintError> {
        let authority = match &self.authority {
            Authority::File { path, pattern } => read_authority(source, path, pattern)?,
            Authority::Fixed(version) => {
                debug!("Using fixed version {}", version);
                (*version).into()
            }
        };

        check_all(source, &authority, &self.targets, on_diagnostic)
    }
}

/// Check every target against `authority`, in order.
///
/// Each target's diagnostics are passed to `on_diagnostic` before the next
/// target is read.
pub fn check_all(
    source: &dyn ContentSource,
    authority: &AuthorityVersion,
    targets: &[Target],
    mut on_diagnostic: impl FnMut(&Diagnostic),
) -> Result<Report, LintError> {
    let mut results = Vec::with_capacity(targets.len());
    let mut diagnostics = Vec::new();

    for target in targets {
        let result = check_target(source, authority, target)?;
        for diagnostic in result.diagnostics(authority) {
            on_diagnostic(&diagnostic);
            diagnostics.push(diagnostic);
        }
        results.push(result);
    }

    info!(
        "Checked {} files against {}: {} problem(s)",
        results.len(),
        authority,
        diagnostics.len()
    );

    Ok(Report {
        authority: *authority,
        results,
        diagnostics,
    })
}

/// Read one target and collect its matching lines
pub fn check_target(
    source: &dyn ContentSource,
    authority: &AuthorityVersion,
    target: &Target,
) -> Result<CheckResult, LintError> {
    let content = source.read(&target.path)?;
    Ok(scan_content(&target.path, &content, authority, target))
}

fn scan_content(
    path: &Path,
    content: &str,
    authority: &AuthorityVersion,
    target: &Target,
) -> CheckResult {
    let matches: Vec<LineMatch> = content
        .lines()
        .enumerate()
        .filter_map(|(line_num, line)| {
            let version = target.pattern.match_line(line)?;
            Some(LineMatch {
                line_number: line_num + 1,
                line: line.trim().to_string(),
                version,
                matches_authority: version.is_some_and(|v| authority.matches(&v)),
            })
        })
        .collect();

    debug!(
        "{}: {} of {} expected occurrence(s)",
        path.display(),
        matches.len(),
        target.expected_count
    );

    CheckResult {
        path: path.to_path_buf(),
        expected_count: target.expected_count,
        matches,
    }
}
