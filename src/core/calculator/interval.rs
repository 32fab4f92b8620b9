//! Minute-based interval arithmetic over a single day.

use crate::errors::AppResult;
use crate::models::BellSchedule;
use crate::utils::time::{MINUTES_PER_DAY, minutes_to_time, to_minutes};

/// A `[start, end]` window expressed in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: i64,
    pub end: i64,
}

impl Span {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        Ok(Self::new(to_minutes(start)?, to_minutes(end)?))
    }

    /// Elapsed minutes, wrapping past midnight when `end < start`.
    pub fn length(&self) -> i64 {
        elapsed(self.start, self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn start_time(&self) -> String {
        minutes_to_time(self.start)
    }

    pub fn end_time(&self) -> String {
        minutes_to_time(self.end)
    }
}

pub(crate) fn elapsed(start: i64, end: i64) -> i64 {
    let diff = end - start;
    if diff < 0 { diff + MINUTES_PER_DAY } else { diff }
}

/// Minutes from `start` to `end`. An end before the start is read as the
/// next day, never as an error.
pub fn elapsed_minutes(start: &str, end: &str) -> AppResult<i64> {
    Ok(elapsed(to_minutes(start)?, to_minutes(end)?))
}

/// Clamps a work interval to `[begin, dismiss]`.
pub fn clip_to_school_bounds(school: &BellSchedule, work: Span) -> AppResult<Span> {
    let begin = to_minutes(&school.begin)?;
    let dismiss = to_minutes(&school.dismiss)?;

    Ok(Span::new(work.start.max(begin), work.end.min(dismiss)))
}

/// Minutes of `period` covered by `work`.
pub fn overlap_minutes(period: Span, work: Span) -> i64 {
    if work.start < period.start {
        if work.end <= period.start {
            0
        } else if work.end <= period.end {
            elapsed(period.start, work.end)
        } else {
            elapsed(period.start, period.end)
        }
    } else if work.start < period.end {
        if work.end <= period.end {
            elapsed(work.start, work.end)
        } else {
            elapsed(work.start, period.end)
        }
    } else {
        0
    }
}

/// Minute breakdown of a work interval against a bell schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    pub clipped: Span,
    pub total: i64,
    pub recess: i64,
    pub lunch: i64,
    pub instructional: i64,
}

pub fn breakdown(school: &BellSchedule, work: Span) -> AppResult<Breakdown> {
    let clipped = clip_to_school_bounds(school, work)?;

    // Work entirely outside the school day.
    if clipped.is_empty() {
        return Ok(Breakdown {
            clipped,
            total: 0,
            recess: 0,
            lunch: 0,
            instructional: 0,
        });
    }

    let (rec_start, rec_end) = school.recess();
    let (lunch_start, lunch_end) = school.lunch();

    let total = clipped.length();
    let recess = overlap_minutes(Span::parse(rec_start, rec_end)?, clipped);
    let lunch = overlap_minutes(Span::parse(lunch_start, lunch_end)?, clipped);

    Ok(Breakdown {
        clipped,
        total,
        recess,
        lunch,
        instructional: total - recess - lunch,
    })
}

/// Elapsed work minus recess and lunch overlap. Can only go negative when
/// the schedule's periods are out of order.
pub fn compute_instructional(school: &BellSchedule, work: Span) -> AppResult<i64> {
    Ok(breakdown(school, work)?.instructional)
}
