//! otrate library root.
//! Exposes the pay-rate engine, the day timeline, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod timeline;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Info { .. } => cli::commands::info::handle(&cli.command, cfg),
        Commands::Schools { .. } => cli::commands::schools::handle(&cli.command, cfg),
        Commands::Timeline { .. } => cli::commands::timeline::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once per run
    let mut cfg = Config::load()?;

    // Command-line override of the schedule file
    if let Some(custom) = &cli.schedules {
        cfg.schedules = custom.clone();
    }

    dispatch(&cli, &cfg)
}
