use crate::cli::commands::timeline::print_timeline;
use crate::cli::commands::{load_schedules, resolve_school};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::{CalculationResult, Preset};
use crate::ui::messages::{detail, header, success};
use crate::utils::colors::{color_for_rule, colorize_minutes};
use crate::utils::mins2readable;

/// Compute and print the pay breakdown for one assignment.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        school,
        start,
        end,
        preset,
        rate,
        json,
        timeline,
    } = cmd
    {
        let book = load_schedules(cfg)?;
        let (name, schedule) = resolve_school(&book, school)?;

        //
        // Missing times come from the preset
        //
        let (preset_start, preset_end) = preset.unwrap_or(Preset::FullDay).times(schedule);
        let start = start.as_deref().unwrap_or(preset_start);
        let end = end.as_deref().unwrap_or(preset_end);

        let base_rate = Config::check_base_rate(rate.unwrap_or(cfg.base_rate))?;

        let result = Core::calculate(&book, name, start, end, base_rate)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        header(format!("{} {} - {}", name, start, end));
        print_breakdown(&result);

        if *timeline {
            println!();
            print_timeline(schedule, Some(start), Some(end), cfg.timeline_width)?;
        }

        println!();
        success(format!(
            "Pay point {} → daily rate ${}",
            result.pay_point_display(),
            result.pay_rate_display()
        ));
    }

    Ok(())
}

fn print_breakdown(result: &CalculationResult) {
    let mins = |m: i64| colorize_minutes(&format!("{} mins", m), m);

    detail("Counted from", format!("{} - {}", result.start, result.end));
    detail(
        "Total time",
        format!(
            "{} ({})",
            mins(result.total_minutes),
            mins2readable(result.total_minutes)
        ),
    );
    detail("Recess", mins(result.recess_minutes));
    detail("Lunch", mins(result.lunch_minutes));
    detail("Instructional", mins(result.instructional_minutes));
    detail("Pay point", result.point_explanation());

    if result.min_rule_applied.is_applied() {
        let rule = result.min_rule_applied;
        detail("Minimum rule", color_for_rule(rule).paint(rule.to_string()));
    }

    detail("Pay rate", result.rate_explanation());
}
