//! Date handling for the register.
//!
//! All dates are stored as `YYYY-MM-DD` strings and never pass through a
//! timezone conversion. The fixed-width zero-padded format makes plain
//! string comparison agree with chronological order.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ymd {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Format year/month/day components as a zero-padded `YYYY-MM-DD` string.
/// No bounds validation; the caller supplies valid calendar values.
pub fn format_ymd(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Parse a `YYYY-MM-DD` string into components. Malformed input yields
/// `None` rather than an error; downstream matching simply fails to match.
pub fn parse_ymd(date: &str) -> Option<Ymd> {
    let mut parts = date.split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some(Ymd { year, month, day })
}

/// Compare two date strings for sorting. Lexicographic comparison is
/// correct because the stored format is fixed-width and zero-padded.
pub fn compare_date_strings(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Whether a date string falls in the given year and month.
pub fn matches_year_month(date: &str, year: i32, month: u32) -> bool {
    match parse_ymd(date) {
        Some(d) => d.year == year && d.month == month,
        None => false,
    }
}

/// Whether a date string is exactly the given year, month, and day.
pub fn matches_year_month_day(date: &str, year: i32, month: u32, day: u32) -> bool {
    match parse_ymd(date) {
        Some(d) => d.year == year && d.month == month && d.day == day,
        None => false,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Render a stored date for read-only display (`M/D/YYYY`). Not used for
/// storage or comparison. Falls back to the raw string on malformed input.
pub fn format_date_for_display(date: &str) -> String {
    match parse_ymd(date) {
        Some(d) => format!("{}/{}/{}", d.month, d.day, d.year),
        None => date.to_string(),
    }
}
