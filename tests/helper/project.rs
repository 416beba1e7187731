//! Temporary project trees laid out the way the built-in table expects

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;
use version_lint::config::DEFAULT_HTML_PAGES;

/// Header declaring `major.minor.patch` the way nanobench does
pub fn nanobench_header(major: u64, minor: u64, patch: u64) -> String {
    format!(
        "#pragma once\n\
         #define ANKERL_NANOBENCH_VERSION_MAJOR {major} // incompatible API changes\n\
         #define ANKERL_NANOBENCH_VERSION_MINOR {minor} // backwards-compatible changes\n\
         #define ANKERL_NANOBENCH_VERSION_PATCH {patch} // backwards-compatible bug fixes\n"
    )
}

/// Sphinx page with the version alone on an indented line
pub fn html_page(version: &str) -> String {
    format!(
        "<div class=\"version\">\n              v{version}\n            </div>\n<p>nanobench</p>\n"
    )
}

/// A project on disk in a temporary directory
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project where header, conf.py and every page agree on `version`
    pub fn consistent(version: &str) -> Self {
        let parts: Vec<u64> = version.split('.').map(|p| p.parse().unwrap()).collect();
        let project = Self::new();
        project.write(
            "src/include/nanobench.h",
            &nanobench_header(parts[0], parts[1], parts[2]),
        );
        project.write(
            "src/docs/conf.py",
            &format!("project = 'nanobench'\nversion = 'v{version}'\n"),
        );
        for page in DEFAULT_HTML_PAGES {
            project.write(page, &html_page(version));
        }
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.dir.path().join(relative)).unwrap();
    }

    /// Run the binary against this project with extra arguments
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_version-lint"))
            .arg("--root")
            .arg(self.root())
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}
