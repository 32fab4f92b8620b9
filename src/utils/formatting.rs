//! Formatting utilities used for CLI and JSON outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

/// Removes ANSI escape sequences.
pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Display width in terminal columns, ignoring colour codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// `385` → `06h 25m`
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Two decimals, as shown on pay stubs.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Up to four decimals, trailing zeros removed (`0.5`, `1.0667`).
pub fn format_pay_point(point: f64) -> String {
    let s = format!("{:.4}", point);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
