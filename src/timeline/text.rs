//! Draws a [`TimelineView`] as rows of terminal character cells.

use super::view::{SegmentKind, TimelineView};
use crate::utils::colors::{CYAN, GREEN, GREY, MAGENTA, RED, RESET, YELLOW};

const OUTSIDE: char = '·';

fn glyph(kind: SegmentKind) -> (char, &'static str) {
    match kind {
        SegmentKind::Instructional => ('█', GREEN),
        SegmentKind::Recess => ('▒', YELLOW),
        SegmentKind::Lunch => ('▓', MAGENTA),
    }
}

fn paint(c: char, color: &str, colored: bool) -> String {
    if colored {
        format!("{color}{c}{RESET}")
    } else {
        c.to_string()
    }
}

/// Column holding `percent` on a track `width` cells wide.
fn column(percent: f64, width: usize) -> usize {
    let col = (percent / 100.0 * width as f64).floor();
    (col.max(0.0) as usize).min(width.saturating_sub(1))
}

/// Returns the track row, the selection row, the marker row and a legend.
pub fn draw(view: &TimelineView, width: usize, colored: bool) -> Vec<String> {
    let width = width.max(10);

    let track: String = (0..width)
        .map(|i| {
            let pct = (i as f64 + 0.5) / width as f64 * 100.0;
            match view.segments.iter().find(|s| s.contains(pct)) {
                Some(seg) => {
                    let (c, color) = glyph(seg.kind);
                    paint(c, color, colored)
                }
                None => paint(OUTSIDE, GREY, colored),
            }
        })
        .collect();

    let start_col = view.start_handle.map(|p| column(p, width));
    let end_col = view.end_handle.map(|p| column(p, width));

    let selection: String = (0..width)
        .map(|i| {
            if Some(i) == start_col {
                paint('[', GREEN, colored)
            } else if Some(i) == end_col {
                paint(']', RED, colored)
            } else if let (Some(s), Some(e)) = (start_col, end_col)
                && i > s
                && i < e
            {
                paint('━', CYAN, colored)
            } else {
                " ".to_string()
            }
        })
        .collect();

    let mut labels = vec![' '; width];
    let mut next_free = 0;
    for marker in &view.markers {
        let col = column(marker.left, width);
        let len = marker.label.chars().count();
        if col < next_free || col + len > width {
            continue;
        }
        for (offset, ch) in marker.label.chars().enumerate() {
            labels[col + offset] = ch;
        }
        next_free = col + len + 1;
    }

    let legend = [
        SegmentKind::Instructional,
        SegmentKind::Recess,
        SegmentKind::Lunch,
    ]
    .iter()
    .map(|kind| {
        let (c, color) = glyph(*kind);
        format!("{} {}", paint(c, color, colored), kind.label().to_lowercase())
    })
    .collect::<Vec<_>>()
    .join("  ");

    vec![track, selection, labels.into_iter().collect(), legend]
}
