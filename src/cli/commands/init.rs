use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::schedules::ScheduleBook;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - a starter bell-schedule file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.schedules.clone(), cli.test)?;

    let mut cfg = Config::load()?;
    if let Some(custom) = &cli.schedules {
        cfg.schedules = custom.clone();
    }

    // Validate what is now on disk
    let book = ScheduleBook::load(&cfg.schedules_path())?;
    info(format!("{} schools available", book.len()));

    success("otrate initialization completed!");
    Ok(())
}
