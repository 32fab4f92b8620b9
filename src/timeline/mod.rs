//! Interactive day timeline: a school's fixed periods plus a user-chosen
//! start/end selection that can be clicked or dragged into place.
//!
//! State lives in [`TimelineState`]; [`Timeline::render`] projects it into a
//! [`TimelineView`] without side effects. Pointer handlers only mutate state
//! and fire the change hook.

pub mod state;
pub mod text;
pub mod view;

pub use state::{Handle, Phase, TimelineState, Track};
pub use view::{Marker, Segment, SegmentKind, Selection, TimelineView};

use crate::errors::AppResult;
use crate::models::BellSchedule;
use crate::utils::time::normalize_time;

/// Left edge of the drawn day.
pub const DAY_START: &str = "07:40";
/// Right edge of the drawn day.
pub const DAY_END: &str = "16:05";
/// Handles snap to this many minutes.
pub const SNAP_MINUTES: i64 = 5;

/// Receives `(school, start, end)` after every successful endpoint update.
pub type ChangeHook<'a> = Box<dyn FnMut(Option<&BellSchedule>, Option<&str>, Option<&str>) + 'a>;

pub struct Timeline<'a> {
    state: TimelineState<'a>,
    track: Track,
    on_change: Option<ChangeHook<'a>>,
}

impl<'a> Timeline<'a> {
    pub fn new(track: Track, school: Option<&'a BellSchedule>) -> Self {
        Self {
            state: TimelineState::new(school),
            track,
            on_change: None,
        }
    }

    pub fn state(&self) -> &TimelineState<'a> {
        &self.state
    }

    pub fn start_time(&self) -> Option<&str> {
        self.state.start_time.as_deref()
    }

    pub fn end_time(&self) -> Option<&str> {
        self.state.end_time.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn set_school(&mut self, school: &'a BellSchedule) {
        self.state.school = Some(school);
    }

    pub fn on_change<F>(&mut self, hook: F)
    where
        F: FnMut(Option<&BellSchedule>, Option<&str>, Option<&str>) + 'a,
    {
        self.on_change = Some(Box::new(hook));
    }

    pub fn render(&self) -> AppResult<TimelineView> {
        view::render(&self.state)
    }

    /// Replaces both endpoints as given, without the drag ordering check.
    pub fn set_times(&mut self, start: Option<&str>, end: Option<&str>) -> AppResult<()> {
        let start = start.map(normalize_time).transpose()?;
        let end = end.map(normalize_time).transpose()?;

        self.state.start_time = start;
        self.state.end_time = end;
        self.notify();
        Ok(())
    }

    pub fn pointer_down(&mut self, handle: Handle) {
        self.state.active = Some(handle);
    }

    /// Moves the armed handle to the pointer. Does nothing when no handle is
    /// armed; returns `DragRejected` when the move would cross the other
    /// handle.
    pub fn pointer_move(&mut self, x: f64) -> AppResult<()> {
        match self.state.active {
            Some(handle) => self.update_from_position(handle, x),
            None => Ok(()),
        }
    }

    pub fn pointer_up(&mut self) {
        self.state.active = None;
    }

    /// Click on the track outside the handles.
    pub fn click(&mut self, x: f64) -> AppResult<()> {
        let handle = self.state.click_target();
        self.state.active = Some(handle);
        let res = self.update_from_position(handle, x);
        self.state.active = None;
        res
    }

    fn update_from_position(&mut self, handle: Handle, x: f64) -> AppResult<()> {
        let time = self.state.time_at(self.track.percent_at(x))?;
        self.state.move_handle(handle, &time)?;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(hook) = self.on_change.as_mut() {
            hook(
                self.state.school,
                self.state.start_time.as_deref(),
                self.state.end_time.as_deref(),
            );
        }
    }
}
