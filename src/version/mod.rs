//! Version values compared by the lint
//!
//! # Modules
//!
//! - [`triple`]: `VersionTriple` and the authority's `AuthorityVersion`
//! - [`semver`]: Parsing user-supplied version strings

pub mod semver;
pub mod triple;

pub use triple::{AuthorityVersion, Component, VersionTriple};
