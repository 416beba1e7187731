use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use version_lint::config::LintConfig;
use version_lint::lint::{Checker, FsSource};
use version_lint::version::semver::parse_triple;

/// Exit status when any version or count problem was reported
const EXIT_DIAGNOSTICS: u8 = 1;
/// Exit status when the run could not complete
const EXIT_FATAL: u8 = 2;

#[derive(Parser)]
#[command(name = "version-lint")]
#[command(
    version,
    about = "Check that documentation files carry the project's current version"
)]
struct Cli {
    /// Directory that relative paths are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON file listing the authority and targets (defaults to the built-in table)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Compare against this version instead of reading the authority file
    #[arg(long, value_name = "VERSION")]
    expect: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("version_lint=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_DIAGNOSTICS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Run the lint and print diagnostics. Returns whether every check passed.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let source = FsSource;

    let config = match &cli.config {
        Some(path) => LintConfig::load(&source, path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => LintConfig::default(),
    }
    .resolve(&cli.root);

    let mut checker = Checker::from_config(&config)?;
    if let Some(expect) = &cli.expect {
        let version =
            parse_triple(expect).ok_or_else(|| anyhow!("Invalid version '{}'", expect))?;
        checker = checker.with_expected(version);
    }

    info!("Checking {} target(s)", checker.targets().len());
    let report = checker.run_with(&source, |diagnostic| println!("{diagnostic}"))?;

    Ok(report.is_ok())
}
