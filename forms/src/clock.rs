//! Calendar helpers for date defaults and date bounds.
//!
//! Dates travel as ISO strings (`YYYY-MM-DD`, months as `YYYY-MM`) because that
//! is what HTML date and month inputs produce.

use time::macros::format_description;
use time::{Date, OffsetDateTime};

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar date in the local time zone.
///
/// Falls back to UTC when the local offset cannot be determined (e.g. a
/// multi-threaded native process).
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Latest "today" a client may be on when this process is on `today`.
///
/// Browsers east of UTC reach the next calendar day first, so a server
/// checking future-date bounds accepts one day ahead.
#[must_use]
pub fn next_day(today: Date) -> Date {
    today.next_day().unwrap_or(today)
}

/// [`next_day`] of [`today`], for validating records sent by browsers.
#[must_use]
pub fn client_today() -> Date {
    next_day(today())
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Format the month of a date as `YYYY-MM`.
#[must_use]
pub fn format_month(date: Date) -> String {
    date.format(format_description!("[year]-[month]"))
        .unwrap_or_default()
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Parse a `YYYY-MM` string into the first day of that month.
pub fn parse_month(raw: &str) -> Option<Date> {
    parse_date(&format!("{}-01", raw.trim()))
}
