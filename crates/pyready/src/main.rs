use clap::Parser;
use pyready::cli::Cli;
use pyready::{dataset, runner};
use ready_core::HttpClient;
use ready_pypi::{PypiRegistry, TargetVersion};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the report; all diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Validated before the dataset is read and before any network activity
    let target: TargetVersion = cli.python_version.parse()?;

    let projects = dataset::load_projects(&cli.projects)?;

    let http = HttpClient::new(Duration::from_secs(cli.timeout));
    let registry = PypiRegistry::with_base_url(http, cli.index_url);

    tracing::info!(
        "classifying {} projects for Python {}",
        projects.len(),
        target
    );
    let report = runner::run(&registry, &target, &projects, cli.concurrency).await;

    println!("{}", report.to_json(cli.pretty)?);
    Ok(())
}
