use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use healthscan_cli::cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    healthscan_cli::commands::run(cli)
}

/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing(json: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
