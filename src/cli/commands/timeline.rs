use crate::cli::commands::{load_schedules, resolve_school};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::BellSchedule;
use crate::timeline::{Timeline, Track, text};
use crate::ui::messages::{header, info};
use crate::utils::time::to_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timeline {
        school,
        start,
        end,
        width,
    } = cmd
    {
        let book = load_schedules(cfg)?;
        let (name, schedule) = resolve_school(&book, school)?;

        header(name);
        print_timeline(
            schedule,
            start.as_deref(),
            end.as_deref(),
            width.unwrap_or(cfg.timeline_width),
        )?;
    }

    Ok(())
}

/// Draws the school's day with the given selection.
pub(crate) fn print_timeline(
    school: &BellSchedule,
    start: Option<&str>,
    end: Option<&str>,
    width: usize,
) -> AppResult<()> {
    // set_times skips the handle ordering check
    if let (Some(s), Some(e)) = (start, end)
        && to_minutes(s)? >= to_minutes(e)?
    {
        return Err(AppError::InvalidInterval {
            start: s.to_string(),
            end: e.to_string(),
        });
    }

    let mut selected: Option<(Option<String>, Option<String>)> = None;

    let lines = {
        let mut timeline = Timeline::new(Track::new(0.0, width as f64), Some(school));
        timeline.on_change(|_, s, e| {
            selected = Some((s.map(str::to_string), e.map(str::to_string)));
        });
        timeline.set_times(start, end)?;
        text::draw(&timeline.render()?, width, true)
    };

    for line in lines {
        println!("  {}", line);
    }

    if let Some((s, e)) = selected
        && (s.is_some() || e.is_some())
    {
        info(format!(
            "Selection: {} → {}",
            s.as_deref().unwrap_or("--:--"),
            e.as_deref().unwrap_or("--:--")
        ));
    }

    Ok(())
}
