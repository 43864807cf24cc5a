use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wt_cli::commands::{pause, repl, resume, start, status, stop, week};
use wt_cli::{Cli, Commands, Config};

/// Load config and open the store, ensuring the parent directory exists.
fn open_store(config_path: Option<&Path>) -> Result<(wt_store::Store, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let store = wt_store::Store::open(&config.database_path).context("failed to open store")?;
    Ok((store, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Some(Commands::Start { task }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            start::run(&mut stdout, &store, task, Local::now())?;
        }
        Some(Commands::Pause) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            pause::run(&mut stdout, &store, Local::now())?;
        }
        Some(Commands::Resume) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            resume::run(&mut stdout, &store, Local::now())?;
        }
        Some(Commands::Stop) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            stop::run(&mut stdout, &store, Local::now())?;
        }
        Some(Commands::Status) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            status::run(&mut stdout, &store, Local::now())?;
        }
        Some(Commands::Week { days, svg, json }) => {
            let (store, config) = open_store(cli.config.as_deref())?;
            let days = days.unwrap_or(config.window_days);
            week::run(&mut stdout, &store, &config, days, *json, svg.as_deref())?;
        }
        Some(Commands::Repl) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            let stdin = std::io::stdin().lock();
            repl::run(stdin, &mut stdout, &store)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            drop(stdout);
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
