use chrono::prelude::*;

use crate::error::CalendarError;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Parse an `MM/DD/YYYY` string into a `NaiveDateTime` with null time.
///
/// Surrounding whitespace is ignored. Malformed or non-existent dates
/// return [`CalendarError::InvalidInput`].
pub fn parse_mdy(text: &str) -> Result<NaiveDateTime, CalendarError> {
    NaiveDate::parse_from_str(text.trim(), "%m/%d/%Y")
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap())
        .map_err(|_| {
            CalendarError::InvalidInput(format!("'{}' is not a valid MM/DD/YYYY date", text.trim()))
        })
}

/// Format a date as `MM/DD/YYYY` with zero-padded month and day.
pub fn fmt_mdy(date: &NaiveDateTime) -> String {
    date.format("%m/%d/%Y").to_string()
}
