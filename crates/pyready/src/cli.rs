use clap::Parser;
use std::path::PathBuf;

/// Command-line surface of the readiness reporter.
///
/// The report goes to stdout; diagnostics go to stderr (filter with
/// `RUST_LOG`). Batch runs for several interpreter versions are the
/// caller's business: invoke once per version and redirect stdout.
#[derive(Parser, Debug)]
#[command(
    name = "pyready",
    version,
    about = "Python version readiness snapshots for top PyPI projects"
)]
pub struct Cli {
    /// Target Python version, e.g. "3.11"
    pub python_version: String,

    /// Path to the top-projects dataset (JSON array of {"project", "total_downloads"})
    #[arg(long, default_value = "top-projects.json")]
    pub projects: PathBuf,

    /// Maximum number of metadata lookups in flight
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Metadata API base URL (override to point at a local index)
    #[arg(long, default_value = ready_pypi::registry::PYPI_BASE)]
    pub index_url: String,

    /// Pretty-print the report JSON
    #[arg(long)]
    pub pretty: bool,
}
