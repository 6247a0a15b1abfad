//! Calendar date primitives.
//!
//! Everything here is plain arithmetic over [`chrono::NaiveDate`]. The
//! engine keys schedule matching, override lookup, and holiday lookup on
//! the zero-padded ISO `YYYY-MM-DD` string: two dates are the same
//! collection day iff their ISO strings are equal. There is no time of day
//! and no timezone anywhere in the engine.

use chrono::{Datelike, NaiveDate};

use crate::error::{GomicalError, Result};

/// Map a case-insensitive English weekday name to its index, 0=Sunday
/// through 6=Saturday.
///
/// Returns `None` for unrecognized names. Schedule matching treats that as
/// "never fires", not as an error.
///
/// # Examples
///
/// ```
/// use gomical_core::date::weekday_index;
///
/// assert_eq!(weekday_index("sunday"), Some(0));
/// assert_eq!(weekday_index("Saturday"), Some(6));
/// assert_eq!(weekday_index("payday"), None);
/// ```
#[must_use]
pub fn weekday_index(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "sunday" => Some(0),
        "monday" => Some(1),
        "tuesday" => Some(2),
        "wednesday" => Some(3),
        "thursday" => Some(4),
        "friday" => Some(5),
        "saturday" => Some(6),
        _ => None,
    }
}

/// Weekday index of a date under the same 0=Sunday convention.
#[must_use]
pub fn date_weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// 1-based occurrence count of the date's weekday within its month.
///
/// The 1st through 7th are week 1, the 8th through 14th week 2, and so on,
/// i.e. `ceil(day_of_month / 7)`.
#[must_use]
pub fn ordinal_week_of_month(date: NaiveDate) -> u32 {
    (date.day() + 6) / 7
}

/// Format a date as zero-padded ISO `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse an ISO `YYYY-MM-DD` string. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`GomicalError::InvalidDate`] when the string is not a valid
/// calendar date in that format.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| GomicalError::InvalidDate(s.trim().to_string()))
}

/// Signed whole-day difference between two calendar dates.
///
/// This is a date-only subtraction, so the result counts calendar days and
/// is unaffected by daylight-saving transitions.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Number of days in the given month (28-31, leap-aware).
///
/// Returns 0 for a month outside 1-12; callers iterating a month see an
/// empty month rather than an error.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next_month_first {
        Some(next) => u32::try_from(days_between(first, next)).unwrap_or(0),
        None => 0,
    }
}
