//! Shared test utilities

#![allow(dead_code)]

pub mod project;

pub use project::{TestProject, html_page, nanobench_header};
