//! Pure projection of a [`TimelineState`] into positioned visual elements.

use super::state::TimelineState;
use crate::errors::AppResult;
use crate::utils::time::to_minutes;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Instructional,
    Recess,
    Lunch,
}

impl SegmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Instructional => "Instructional",
            SegmentKind::Recess => "Recess",
            SegmentKind::Lunch => "Lunch",
        }
    }
}

/// A fixed block of the school day. `left` and `width` are percentages of
/// the day span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: String,
    pub end: String,
    pub left: f64,
    pub width: f64,
    pub tooltip: String,
}

impl Segment {
    pub fn contains(&self, percent: f64) -> bool {
        percent >= self.left && percent < self.left + self.width
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub label: String,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub left: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
    pub selection: Option<Selection>,
    pub start_handle: Option<f64>,
    pub end_handle: Option<f64>,
}

pub fn render(state: &TimelineState<'_>) -> AppResult<TimelineView> {
    let mut segments = Vec::new();

    if let Some(school) = state.school {
        let blocks = [
            (SegmentKind::Instructional, &school.begin, &school.rec_start),
            (SegmentKind::Recess, &school.rec_start, &school.rec_end),
            (SegmentKind::Instructional, &school.rec_end, &school.lunch_start),
            (SegmentKind::Lunch, &school.lunch_start, &school.lunch_end),
            (SegmentKind::Instructional, &school.lunch_end, &school.dismiss),
        ];

        for (kind, start, end) in blocks {
            let left = state.percent_of(start)?;
            segments.push(Segment {
                kind,
                start: start.clone(),
                end: end.clone(),
                left,
                width: state.percent_of(end)? - left,
                tooltip: format!("{}: {} - {}", kind.label(), start, end),
            });
        }
    }

    let start_handle = match &state.start_time {
        Some(t) => Some(state.percent_of(t)?),
        None => None,
    };
    let end_handle = match &state.end_time {
        Some(t) => Some(state.percent_of(t)?),
        None => None,
    };

    let selection = match (start_handle, end_handle) {
        (Some(l), Some(r)) => Some(Selection {
            left: l,
            width: r - l,
        }),
        _ => None,
    };

    Ok(TimelineView {
        segments,
        markers: markers(state)?,
        selection,
        start_handle,
        end_handle,
    })
}

/// Day-start label followed by every full hour inside the span.
fn markers(state: &TimelineState<'_>) -> AppResult<Vec<Marker>> {
    let day_start = to_minutes(state.day_start)?;
    let day_end = to_minutes(state.day_end)?;

    let mut out = vec![Marker {
        label: format!("{}:{:02}", day_start / 60, day_start % 60),
        left: 0.0,
    }];

    let first_hour = day_start / 60 + 1;
    for hour in first_hour..=(day_end / 60) {
        let time = format!("{:02}:00", hour);
        out.push(Marker {
            label: format!("{}:00", hour),
            left: state.percent_of(&time)?,
        });
    }

    Ok(out)
}
