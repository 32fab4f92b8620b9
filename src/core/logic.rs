use crate::core::calculator::{self, Span};
use crate::core::schedules::ScheduleBook;
use crate::errors::{AppError, AppResult};
use crate::models::{BellSchedule, CalculationResult};

pub struct Core;

impl Core {
    /// Looks the school up in `book` and computes its pay breakdown.
    pub fn calculate(
        book: &ScheduleBook,
        school_name: &str,
        start: &str,
        end: &str,
        base_rate: f64,
    ) -> AppResult<CalculationResult> {
        let school = book
            .get(school_name)
            .ok_or_else(|| AppError::UnknownSchool(school_name.to_string()))?;

        Self::calculate_for(school, start, end, base_rate)
    }

    /// Pay breakdown for a work interval at a known school.
    pub fn calculate_for(
        school: &BellSchedule,
        start: &str,
        end: &str,
        base_rate: f64,
    ) -> AppResult<CalculationResult> {
        let work = Span::parse(start, end)?;
        if work.start >= work.end {
            return Err(AppError::InvalidInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let minutes = calculator::breakdown(school, work)?;
        if minutes.instructional < 0 {
            return Err(AppError::InvalidSchedule(format!(
                "recess {}-{} and lunch {}-{} do not fit between {} and {}",
                school.rec_start,
                school.rec_end,
                school.lunch_start,
                school.lunch_end,
                school.begin,
                school.dismiss
            )));
        }

        let point = calculator::compute_pay_point(minutes.instructional);
        let point = calculator::apply_floor(point, work, school)?;

        Ok(CalculationResult {
            start: minutes.clipped.start_time(),
            end: minutes.clipped.end_time(),
            total_minutes: minutes.total,
            recess_minutes: minutes.recess,
            lunch_minutes: minutes.lunch,
            instructional_minutes: minutes.instructional,
            raw_pay_point: point.raw,
            pay_point: point.value,
            base_rate,
            pay_rate: calculator::compute_pay_rate(point.value, base_rate),
            min_rule_applied: point.rule,
        })
    }
}
