use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wh_cli::commands::{self, count, csv, delta, json, normalize};
use wh_cli::{Action, Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.working_hours, cli.daily_break_hours);
    tracing::debug!(?config, "loaded configuration");

    let document = commands::load_document(&cli.filename)?;

    let stdout = std::io::stdout();
    let colorize = stdout.is_terminal();
    let mut writer = stdout.lock();

    match cli.output.action() {
        Action::Csv => csv::run(&mut writer, &document)?,
        Action::Delta => delta::run(&mut writer, &document, &config.balance(), colorize)?,
        Action::Count => count::run(&mut writer, &document)?,
        Action::Json => json::run(&mut writer, &document)?,
        Action::Normalize => normalize::run(&mut writer, &document)?,
    }

    Ok(())
}
