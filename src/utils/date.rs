use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a calendar date. Accepts `YYYY-MM-DD`, `today` and `yesterday`.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "today" => return Ok(today()),
        "yesterday" => {
            return today()
                .pred_opt()
                .ok_or_else(|| AppError::InvalidDate(s.to_string()));
        }
        _ => {}
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

fn month_last_day(y: i32, m: u32) -> Option<NaiveDate> {
    let (ny, nm) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// Bounds of a single period token: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            Some((first, month_last_day(first.year(), first.month())?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse `--period` into inclusive bounds.
///
/// Supports `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `start:end` ranges of the
/// same shape. `all` (or no value) means no bounds.
pub fn parse_period(p: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let p = match p.map(str::trim) {
        None => return Ok(None),
        Some(p) if p.eq_ignore_ascii_case("all") => return Ok(None),
        Some(p) => p,
    };

    let invalid = || AppError::InvalidPeriod(p.to_string());

    let (start, end) = match p.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(invalid());
            }
            let (start, _) = period_bounds(s).ok_or_else(invalid)?;
            let (_, end) = period_bounds(e).ok_or_else(invalid)?;
            (start, end)
        }
        None => period_bounds(p).ok_or_else(invalid)?,
    };

    if start > end {
        return Err(invalid());
    }
    Ok(Some((start, end)))
}

pub fn in_bounds(d: NaiveDate, bounds: Option<(NaiveDate, NaiveDate)>) -> bool {
    match bounds {
        None => true,
        Some((start, end)) => d >= start && d <= end,
    }
}
