mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scorpion_config::FileConfigSource;
use scorpion_core::{DefaultsController, TransportConfig};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let controller = connect(&cli.global).await?;

    match cli.command {
        Command::Status => commands::status(&controller, &cli.global).await,
        Command::Apply(args) => commands::apply(&controller, &cli.global, args.factory).await,
    }
}

/// Connect to the device named by the global options.
async fn connect(global: &GlobalOpts) -> Result<DefaultsController, CliError> {
    let host = global.host.as_deref().ok_or(CliError::MissingHost)?;

    let defaults = FileConfigSource::default_paths();
    let site_path = global
        .config
        .clone()
        .unwrap_or_else(|| defaults.site_path().to_path_buf());
    let template_path = global
        .params
        .clone()
        .unwrap_or_else(|| defaults.template_path().to_path_buf());
    let source = FileConfigSource::new(site_path, template_path);

    let transport = TransportConfig {
        timeout: Duration::from_secs(global.timeout),
    };

    tracing::debug!(host, port = global.port, "connecting to device");
    let controller = DefaultsController::connect(host, global.port, &transport, &source).await?;
    Ok(controller)
}
