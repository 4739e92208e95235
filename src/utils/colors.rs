/// ANSI color helper utilities for terminal output.
use crate::models::AttendanceStatus;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => GREEN,
        AttendanceStatus::Absent => RED,
        AttendanceStatus::Late => YELLOW,
    }
}

/// Attendance rate color:
/// \>= 90 → green
/// \>= 75 → yellow
/// otherwise red
pub fn color_for_rate(rate: f64) -> &'static str {
    if rate >= 90.0 {
        GREEN
    } else if rate >= 75.0 {
        YELLOW
    } else {
        RED
    }
}

pub fn colorize_status(status: AttendanceStatus) -> String {
    format!("{}{}{}", color_for_status(status), status, RESET)
}

pub fn colorize_flag(on: bool) -> String {
    if on {
        format!("{GREEN}on{RESET}")
    } else {
        format!("{GREY}off{RESET}")
    }
}

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring color codes.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}
