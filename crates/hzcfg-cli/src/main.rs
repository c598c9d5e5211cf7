//! hzcfg CLI
//!
//! Locates a product's XML configuration and prints it fully resolved.

mod cli;
mod commands;
mod context;
mod error;
mod logging;
mod resources;

use clap::Parser;
use colored::Colorize;
use hzcfg_fs::NormalizedPath;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("cannot initialise logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    let working_dir = NormalizedPath::new(std::env::current_dir()?);
    let loader = context::build_loader(&cli, &working_dir)?;

    match &cli.command {
        Commands::Locate { json } => commands::run_locate(&loader, *json),
        Commands::Resolve { output } => commands::run_resolve(&loader, output.as_deref()),
    }
}
