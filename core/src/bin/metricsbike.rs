use clap::Parser;
use tracing_subscriber::EnvFilter;

use metricsbike_core::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    // log-records fra biblioteket fanges via tracing-log
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}
