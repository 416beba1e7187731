use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::lint::error::LintError;
use crate::lint::source::ContentSource;

// =============================================================================
// Built-in table
// =============================================================================

/// Header declaring the release version, one `#define` per component
pub const DEFAULT_AUTHORITY_PATH: &str = "src/include/nanobench.h";

/// Matches `#define ANKERL_NANOBENCH_VERSION_MAJOR 4` and friends
pub const DEFAULT_AUTHORITY_PATTERN: &str = r"#define ANKERL_NANOBENCH_VERSION_([A-Z]+) (\d+)";

/// Sphinx configuration: `version = 'v4.2.0'`
pub const CONF_PY_PATTERN: &str = r"version = 'v(\d+)\.(\d+)\.(\d+)'";

/// Generated HTML pages show the version alone on a line
pub const HTML_VERSION_PATTERN: &str = r"^\s*v(\d+)\.(\d+)\.(\d+)$";

/// Generated documentation pages that each show the version once
pub const DEFAULT_HTML_PAGES: &[&str] = &[
    "docs/CODE_OF_CONDUCT.html",
    "docs/comparison.html",
    "docs/genindex.html",
    "docs/index.html",
    "docs/license.html",
    "docs/reference.html",
    "docs/search.html",
    "docs/tutorial.html",
];

/// Lint configuration: where the version comes from and where it must appear
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LintConfig {
    pub authority: AuthorityConfig,
    pub targets: Vec<TargetConfig>,
}

impl Default for LintConfig {
    fn default() -> Self {
        let conf_py = TargetConfig::new("src/docs/conf.py", CONF_PY_PATTERN, 1);
        let pages = DEFAULT_HTML_PAGES
            .iter()
            .map(|page| TargetConfig::new(*page, HTML_VERSION_PATTERN, 1));

        Self {
            authority: AuthorityConfig {
                path: PathBuf::from(DEFAULT_AUTHORITY_PATH),
                pattern: DEFAULT_AUTHORITY_PATTERN.to_string(),
                kind: AuthorityKind::Components,
            },
            targets: std::iter::once(conf_py).chain(pages).collect(),
        }
    }
}

/// Source of truth for the version
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthorityConfig {
    pub path: PathBuf,
    pub pattern: String,
    #[serde(default)]
    pub kind: AuthorityKind,
}

/// How the authority pattern's capture groups are read
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AuthorityKind {
    /// Three groups: major, minor, patch
    #[default]
    Triple,
    /// Two groups: component label (`MAJOR`/`MINOR`/`PATCH`) and number
    Components,
}

/// A file that must carry the authority's version
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetConfig {
    pub path: PathBuf,
    /// Regex with three capture groups: major, minor, patch
    pub pattern: String,
    /// Number of lines expected to match
    #[serde(default = "default_count")]
    pub count: usize,
}

impl TargetConfig {
    pub fn new(path: impl Into<PathBuf>, pattern: &str, count: usize) -> Self {
        Self {
            path: path.into(),
            pattern: pattern.to_string(),
            count,
        }
    }
}

fn default_count() -> usize {
    1
}

impl LintConfig {
    /// Parse a JSON configuration
    pub fn from_json(path: &Path, content: &str) -> Result<Self, LintError> {
        serde_json::from_str(content).map_err(|source| LintError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a JSON configuration file
    pub fn load(source: &dyn ContentSource, path: &Path) -> Result<Self, LintError> {
        let content = source.read(path)?;
        Self::from_json(path, &content)
    }

    /// Resolve relative paths against `root`. Absolute paths are kept.
    pub fn resolve(mut self, root: &Path) -> Self {
        self.authority.path = root.join(&self.authority.path);
        for target in &mut self.targets {
            target.path = root.join(&target.path);
        }
        self
    }
}
