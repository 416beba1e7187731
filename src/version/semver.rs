use semver::Version;

use crate::version::triple::VersionTriple;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros,
/// and strips a leading 'v' as written in release tags.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "v1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Parse a version string into a plain triple.
///
/// Pre-release and build metadata are rejected: documentation carries
/// bare `major.minor.patch` versions only.
pub fn parse_triple(version: &str) -> Option<VersionTriple> {
    let parsed = parse_version(version)?;
    if !parsed.pre.is_empty() || !parsed.build.is_empty() {
        return None;
    }
    Some(VersionTriple::new(parsed.major, parsed.minor, parsed.patch))
}
