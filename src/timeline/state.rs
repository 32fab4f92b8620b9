//! Timeline state and the rules for moving its endpoints.

use super::{DAY_END, DAY_START, SNAP_MINUTES};
use crate::errors::{AppError, AppResult};
use crate::models::BellSchedule;
use crate::utils::time::{minutes_to_time, to_minutes};

/// One of the two draggable endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Start,
    End,
}

/// Selection progress, derived from which endpoints are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No start time; the next click starts a selection.
    Idle,
    /// Start chosen; the next click sets the end.
    StartSet,
    /// Both chosen; the next click starts over.
    BothSet,
}

/// The container's horizontal extent, in the caller's pointer units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub left: f64,
    pub width: f64,
}

impl Track {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Pointer x → percentage across the track, clamped to [0, 100].
    pub fn percent_at(&self, x: f64) -> f64 {
        if self.width <= 0.0 {
            return 0.0;
        }
        ((x - self.left) / self.width * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone)]
pub struct TimelineState<'a> {
    pub school: Option<&'a BellSchedule>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub day_start: &'static str,
    pub day_end: &'static str,
    /// Handle armed by a pointer-down, if any.
    pub active: Option<Handle>,
}

impl<'a> TimelineState<'a> {
    pub fn new(school: Option<&'a BellSchedule>) -> Self {
        Self {
            school,
            start_time: None,
            end_time: None,
            day_start: DAY_START,
            day_end: DAY_END,
            active: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match (&self.start_time, &self.end_time) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::StartSet,
            (Some(_), Some(_)) => Phase::BothSet,
        }
    }

    fn day_bounds(&self) -> AppResult<(i64, i64)> {
        Ok((to_minutes(self.day_start)?, to_minutes(self.day_end)?))
    }

    /// Position of `time` as a percentage of the day span.
    pub fn percent_of(&self, time: &str) -> AppResult<f64> {
        let (day_start, day_end) = self.day_bounds()?;
        let t = to_minutes(time)?;
        Ok((t - day_start) as f64 / (day_end - day_start) as f64 * 100.0)
    }

    /// Time at a percentage of the day span, snapped to the nearest
    /// [`SNAP_MINUTES`].
    pub fn time_at(&self, percent: f64) -> AppResult<String> {
        let (day_start, day_end) = self.day_bounds()?;
        let pct = percent.clamp(0.0, 100.0);
        let minutes = pct / 100.0 * (day_end - day_start) as f64 + day_start as f64;
        let step = SNAP_MINUTES as f64;
        let snapped = (minutes / step).round() as i64 * SNAP_MINUTES;
        Ok(minutes_to_time(snapped))
    }

    /// Moves one endpoint, keeping start strictly before end.
    ///
    /// A move that would break the ordering returns `DragRejected` and
    /// leaves the state untouched.
    pub fn move_handle(&mut self, handle: Handle, time: &str) -> AppResult<()> {
        let t = to_minutes(time)?;

        match handle {
            Handle::Start => {
                if let Some(end) = &self.end_time
                    && t >= to_minutes(end)?
                {
                    return Err(AppError::DragRejected(format!(
                        "start {} must stay before end {}",
                        minutes_to_time(t),
                        end
                    )));
                }
                self.start_time = Some(minutes_to_time(t));
            }
            Handle::End => {
                if let Some(start) = &self.start_time
                    && t <= to_minutes(start)?
                {
                    return Err(AppError::DragRejected(format!(
                        "end {} must stay after start {}",
                        minutes_to_time(t),
                        start
                    )));
                }
                self.end_time = Some(minutes_to_time(t));
            }
        }

        Ok(())
    }

    /// Decides which endpoint a click on the track sets, clearing the
    /// selection when a new one begins.
    pub fn click_target(&mut self) -> Handle {
        match self.phase() {
            Phase::Idle | Phase::BothSet => {
                self.start_time = None;
                self.end_time = None;
                Handle::Start
            }
            Phase::StartSet => Handle::End,
        }
    }
}
