//! Pay point and pay rate derivation, including the minimum-pay floors.

use crate::core::calculator::interval::Span;
use crate::errors::AppResult;
use crate::models::{BellSchedule, MinRule};
use crate::utils::time::to_minutes;

/// Instructional minutes in a reference full day.
pub const FULL_DAY_MINUTES: f64 = 300.0;

/// Daily rate used when none is configured.
pub const DEFAULT_BASE_RATE: f64 = 286.38;

/// A pay point together with the unfloored value it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayPoint {
    pub raw: f64,
    pub value: f64,
    pub rule: MinRule,
}

impl PayPoint {
    pub fn from_raw(raw: f64) -> Self {
        Self {
            raw,
            value: raw,
            rule: MinRule::None,
        }
    }
}

pub fn compute_pay_point(instructional_minutes: i64) -> PayPoint {
    PayPoint::from_raw(instructional_minutes as f64 / FULL_DAY_MINUTES)
}

/// Applies the minimum-pay floors.
///
/// `raw_work` is the interval as entered, before clipping to the school day.
/// The through-lunch floor is checked first. The result is always derived
/// from `point.raw`, so floors can be re-applied without drifting.
pub fn apply_floor(
    point: PayPoint,
    raw_work: Span,
    school: &BellSchedule,
) -> AppResult<PayPoint> {
    let lunch_start = to_minutes(&school.lunch_start)?;
    let lunch_end = to_minutes(&school.lunch_end)?;

    let spans_lunch = raw_work.start < lunch_start && raw_work.end > lunch_end;

    let rule = if spans_lunch && point.raw < 0.7 {
        MinRule::ThroughLunch
    } else if point.raw < 0.5 {
        MinRule::Minimum
    } else {
        MinRule::None
    };

    Ok(PayPoint {
        raw: point.raw,
        value: rule.floor().unwrap_or(point.raw),
        rule,
    })
}

/// Full-precision rate; round only when displaying.
pub fn compute_pay_rate(pay_point: f64, base_rate: f64) -> f64 {
    base_rate * pay_point
}
