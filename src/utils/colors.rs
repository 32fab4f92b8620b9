//! ANSI color helper utilities for terminal output.

use crate::models::MinRule;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Colour for the floor rule line of a breakdown.
pub fn color_for_rule(rule: MinRule) -> Colour {
    match rule {
        MinRule::None => Colour::White,
        MinRule::Minimum => Colour::Yellow,
        MinRule::ThroughLunch => Colour::Purple,
    }
}

/// Greys out zero-minute values in a breakdown.
pub fn colorize_minutes(value: &str, mins: i64) -> String {
    if mins == 0 {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
