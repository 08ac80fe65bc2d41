//! Vitrine CLI
//!
//! Parse free-form French shopping queries into catalog filters.

use anyhow::Result;
use clap::Parser;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose raises the default log level; RUST_LOG still overrides
    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = match cli.command {
        Commands::Parse(args) => commands::parse::run(args, cli.format)?,
        Commands::Search(args) => commands::search::run(args, cli.format)?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
