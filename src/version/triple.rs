//! Version triples and the authority's possibly-incomplete version

use std::fmt;

/// A `major.minor.patch` version found in a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Build a triple from three captured decimal strings.
    ///
    /// Returns None if any component does not fit in a `u64`.
    pub fn from_parts(major: &str, minor: &str, patch: &str) -> Option<Self> {
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
            patch: patch.parse().ok()?,
        })
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which part of a version a component label refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

/// Labels are matched exactly: `MAJOR`, `MINOR`, `PATCH`
impl std::str::FromStr for Component {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAJOR" => Ok(Component::Major),
            "MINOR" => Ok(Component::Minor),
            "PATCH" => Ok(Component::Patch),
            _ => Err(()),
        }
    }
}

/// The version declared by the authority file.
///
/// Components are resolved independently; anything never resolved
/// renders as `??` and makes the version unequal to every triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorityVersion {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
}

impl AuthorityVersion {
    /// Placeholder for an authority file with no version line
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn set(&mut self, component: Component, value: Option<u64>) {
        match component {
            Component::Major => self.major = value,
            Component::Minor => self.minor = value,
            Component::Patch => self.patch = value,
        }
    }

    /// Returns the full triple if every component was resolved
    pub fn resolved(&self) -> Option<VersionTriple> {
        Some(VersionTriple::new(self.major?, self.minor?, self.patch?))
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved().is_some()
    }

    /// Whether a triple found in a target agrees with the authority
    pub fn matches(&self, triple: &VersionTriple) -> bool {
        self.resolved().is_some_and(|own| own == *triple)
    }
}

impl From<VersionTriple> for AuthorityVersion {
    fn from(triple: VersionTriple) -> Self {
        Self {
            major: Some(triple.major),
            minor: Some(triple.minor),
            patch: Some(triple.patch),
        }
    }
}

impl fmt::Display for AuthorityVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |value: Option<u64>| value.map_or_else(|| "??".to_string(), |v| v.to_string());
        write!(
            f,
            "{}.{}.{}",
            part(self.major),
            part(self.minor),
            part(self.patch)
        )
    }
}
