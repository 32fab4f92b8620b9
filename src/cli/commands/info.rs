use crate::cli::commands::timeline::print_timeline;
use crate::cli::commands::{load_schedules, resolve_school};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::Preset;
use crate::ui::messages::{detail, header};

/// Show a school's bell times, its full-day value and its timeline.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Info { school } = cmd {
        let book = load_schedules(cfg)?;
        let (name, schedule) = resolve_school(&book, school)?;

        header(name);
        detail("Instruction starts", &schedule.begin);
        detail("Dismissal", &schedule.dismiss);
        detail(
            "Recess",
            format!("{} - {}", schedule.rec_start, schedule.rec_end),
        );
        detail(
            "Lunch",
            format!("{} - {}", schedule.lunch_start, schedule.lunch_end),
        );

        let (begin, dismiss) = Preset::FullDay.times(schedule);
        let full_day = Core::calculate_for(schedule, begin, dismiss, cfg.base_rate)?;
        detail(
            "Instructional day",
            format!(
                "{} mins (pay point {})",
                full_day.instructional_minutes,
                full_day.pay_point_display()
            ),
        );

        println!();
        print_timeline(schedule, None, None, cfg.timeline_width)?;
    }

    Ok(())
}
