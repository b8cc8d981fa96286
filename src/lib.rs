//! recslug - URL slugs for records, prefixed with their identifier

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_base, handle_build, handle_completions, handle_extract, handle_records},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Base(args) => handle_base(args, &config),
        Command::Build(args) => handle_build(args, &config),
        Command::Extract(args) => handle_extract(args),
        Command::Records(args) => handle_records(args, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("recslug={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
