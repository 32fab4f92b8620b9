pub mod calc;
pub mod config;
pub mod info;
pub mod init;
pub mod schools;
pub mod timeline;

use crate::config::Config;
use crate::core::schedules::ScheduleBook;
use crate::errors::{AppError, AppResult};
use crate::models::BellSchedule;
use crate::ui::messages::{info, warning};

/// Reads the configured schedule file.
pub(crate) fn load_schedules(cfg: &Config) -> AppResult<ScheduleBook> {
    let path = cfg.schedules_path();
    if !path.exists() {
        return Err(AppError::Config(format!(
            "schedule file not found: {} (run `otrate init` or pass --schedules)",
            path.display()
        )));
    }
    ScheduleBook::load(&path)
}

/// Looks a school up, suggesting close names when it is unknown. Returns the
/// name as stored in the schedule file.
pub(crate) fn resolve_school<'a>(
    book: &'a ScheduleBook,
    name: &str,
) -> AppResult<(&'a str, &'a BellSchedule)> {
    if let Some(found) = book.entry(name) {
        return Ok(found);
    }

    let hints = book.search(name);
    if hints.is_empty() {
        warning(format!("No school matches '{}'.", name));
    } else {
        info(format!("Did you mean: {}?", hints.join(", ")));
    }

    Err(AppError::UnknownSchool(name.to_string()))
}
