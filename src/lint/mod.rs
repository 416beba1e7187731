//! Version consistency lint
//!
//! Reads the authoritative version, then checks every target file for
//! lines carrying a version and compares them against it.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Authority  │────▶│   Checker   │────▶│ Diagnostics │
//! │  (version)  │     │  (targets)  │     │  (report)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            ▲
//!                            │
//!                     ┌─────────────┐
//!                     │   Source    │
//!                     │ (file text) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`authority`]: Extracts the authoritative version
//! - [`checker`]: Scans targets and builds the report
//! - [`diagnostics`]: Reported version and count problems
//! - [`error`]: Errors that abort a run
//! - [`pattern`]: Compiled and validated line patterns
//! - [`source`]: File content access, mockable in tests

pub mod authority;
pub mod checker;
pub mod diagnostics;
pub mod error;
pub mod pattern;
pub mod source;

pub use checker::{CheckResult, Checker, Report};
pub use diagnostics::Diagnostic;
pub use error::LintError;
pub use source::{ContentSource, FsSource};
