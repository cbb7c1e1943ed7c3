use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod commands;
mod config;
mod display;
mod menu;
mod prompt;
mod session;
mod store;
mod template;

use cli::{Cli, Commands, PlayArgs};
use config::Config;

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("madlib")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("madlib.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);
    let config = Config::load(cli.config.as_ref())?;

    match &cli.command {
        None => {
            commands::play::run(&config, &PlayArgs::default()).context("Play command failed")?;
        }
        Some(Commands::Play(args)) => {
            commands::play::run(&config, args).context("Play command failed")?;
        }
        Some(Commands::List) => {
            commands::list::run(&config).context("List command failed")?;
        }
        Some(Commands::Init) => {
            commands::init::run(&config).context("Init command failed")?;
        }
    }

    Ok(())
}
