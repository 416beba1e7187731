//! Reading the authoritative version
//!
//! The authority file is scanned top to bottom. For every component the
//! first matching line wins; later lines that disagree are ignored with a
//! warning. Components that never match stay unresolved (`??`), which is
//! not an error by itself but makes every target line a mismatch.

use std::path::Path;

use tracing::{debug, warn};

use crate::lint::error::LintError;
use crate::lint::pattern::{AuthorityPattern, group};
use crate::lint::source::ContentSource;
use crate::version::triple::{AuthorityVersion, Component};

/// Read the authority file and extract its version
pub fn read_authority(
    source: &dyn ContentSource,
    path: &Path,
    pattern: &AuthorityPattern,
) -> Result<AuthorityVersion, LintError> {
    let content = source.read(path)?;
    let version = parse_authority(path, &content, pattern)?;

    if version.is_resolved() {
        debug!("Authority {} declares {}", path.display(), version);
    } else {
        warn!(
            "No complete version found in {} (pattern '{}'), got {}",
            path.display(),
            pattern.as_str(),
            version
        );
    }

    Ok(version)
}

/// Extract the authority version from already-loaded content
pub fn parse_authority(
    path: &Path,
    content: &str,
    pattern: &AuthorityPattern,
) -> Result<AuthorityVersion, LintError> {
    let mut version = AuthorityVersion::unknown();
    let mut seen = [false; 3];

    for (line_num, line) in content.lines().enumerate() {
        match pattern {
            AuthorityPattern::Triple(triple_pattern) => {
                let Some(triple) = triple_pattern.match_line(line) else {
                    continue;
                };
                if seen.iter().all(|s| *s) {
                    ignore_later(path, line_num, line);
                    continue;
                }
                version = match triple {
                    Some(triple) => triple.into(),
                    None => AuthorityVersion::unknown(),
                };
                seen = [true; 3];
            }
            AuthorityPattern::Components(re) => {
                let Some(caps) = re.captures(line) else {
                    continue;
                };
                let label = group(&caps, 1);
                let component: Component =
                    label.parse().map_err(|_| LintError::UnknownComponent {
                        path: path.to_path_buf(),
                        label: label.to_string(),
                    })?;
                let slot = component as usize;
                if seen[slot] {
                    ignore_later(path, line_num, line);
                    continue;
                }
                version.set(component, group(&caps, 2).parse().ok());
                seen[slot] = true;
            }
        }
    }

    Ok(version)
}

fn ignore_later(path: &Path, line_num: usize, line: &str) {
    warn!(
        "Ignoring later version line {}:{}: '{}'",
        path.display(),
        line_num + 1,
        line.trim()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthorityKind, DEFAULT_AUTHORITY_PATTERN};
    use crate::lint::source::MockContentSource;
    use crate::version::triple::VersionTriple;
    use rstest::rstest;

    const HEADER: &str = "\
// nanobench
#define ANKERL_NANOBENCH_VERSION_MAJOR 4 // incompatible API changes
#define ANKERL_NANOBENCH_VERSION_MINOR 2 // backwards-compatible changes
#define ANKERL_NANOBENCH_VERSION_PATCH 0 // backwards-compatible bug fixes
";

    fn components() -> AuthorityPattern {
        AuthorityPattern::new(AuthorityKind::Components, DEFAULT_AUTHORITY_PATTERN).unwrap()
    }

    fn triple() -> AuthorityPattern {
        AuthorityPattern::new(AuthorityKind::Triple, r"^VERSION (\d+)\.(\d+)\.(\d+)$").unwrap()
    }

    fn parse(content: &str, pattern: &AuthorityPattern) -> AuthorityVersion {
        parse_authority(Path::new("authority"), content, pattern).unwrap()
    }

    #[test]
    fn components_are_read_from_separate_lines() {
        assert_eq!(
            parse(HEADER, &components()),
            VersionTriple::new(4, 2, 0).into()
        );
    }

    #[rstest]
    #[case("VERSION 4.2.0\n", VersionTriple::new(4, 2, 0).into())]
    #[case("name\nVERSION 10.0.3\n", VersionTriple::new(10, 0, 3).into())]
    // first match wins
    #[case("VERSION 4.2.0\nVERSION 5.0.0\n", VersionTriple::new(4, 2, 0).into())]
    #[case("no version here\n", AuthorityVersion::unknown())]
    #[case("", AuthorityVersion::unknown())]
    fn triple_authority_returns_expected(
        #[case] content: &str,
        #[case] expected: AuthorityVersion,
    ) {
        assert_eq!(parse(content, &triple()), expected);
    }

    #[test]
    fn first_component_line_wins() {
        let content = format!("{HEADER}#define ANKERL_NANOBENCH_VERSION_MAJOR 9\n");
        assert_eq!(
            parse(&content, &components()),
            VersionTriple::new(4, 2, 0).into()
        );
    }

    #[test]
    fn missing_component_stays_unresolved() {
        let content = "#define ANKERL_NANOBENCH_VERSION_MAJOR 4\n\
                       #define ANKERL_NANOBENCH_VERSION_PATCH 1\n";

        let version = parse(content, &components());

        assert_eq!(version.to_string(), "4.??.1");
        assert!(!version.is_resolved());
    }

    #[test]
    fn unknown_component_label_is_fatal() {
        let content = "#define ANKERL_NANOBENCH_VERSION_TWEAK 3\n";

        let err = parse_authority(Path::new("v.h"), content, &components()).unwrap_err();

        assert!(matches!(err, LintError::UnknownComponent { ref label, .. } if label == "TWEAK"));
    }

    #[test]
    fn read_authority_propagates_io_error() {
        let mut source = MockContentSource::new();
        source.expect_read().returning(|path| {
            Err(LintError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        });

        let result = read_authority(&source, Path::new("missing.h"), &components());

        assert!(matches!(result, Err(LintError::Io { .. })));
    }

    #[test]
    fn read_authority_uses_source_content() {
        let mut source = MockContentSource::new();
        source
            .expect_read()
            .withf(|path| path == Path::new("nanobench.h"))
            .returning(|_| Ok(HEADER.to_string()));

        let version = read_authority(&source, Path::new("nanobench.h"), &components()).unwrap();

        assert_eq!(version, VersionTriple::new(4, 2, 0).into());
    }
}
