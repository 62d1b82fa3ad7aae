//! Date formatting for event badges and the footer.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{Datelike, NaiveDate};

/// Short month name and day of month for an ISO `YYYY-MM-DD` date.
///
/// Returns `None` for anything that does not parse.
#[must_use]
pub fn event_badge(date: &str) -> Option<(String, u32)> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some((parsed.format("%b").to_string(), parsed.day()))
}

/// The current calendar year (UTC).
#[must_use]
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}
