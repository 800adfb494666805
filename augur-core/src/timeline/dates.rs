//! Calendar-day parsing and reference-date normalization.

use augur_types::AugurError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a source date into a calendar day, stripping any time-of-day.
///
/// Accepted shapes:
/// - `YYYY-MM-DD`
/// - RFC 3339 timestamps; the day is taken in the offset the timestamp was written in
/// - naive `YYYY-MM-DDTHH:MM:SS[.fff]` and `YYYY-MM-DD HH:MM:SS[.fff]`
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `AugurError::InvalidDate` when none of the shapes match.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, AugurError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AugurError::invalid_date(raw, "empty date"));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    // Re-run the plain date parse to surface its diagnostic.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| AugurError::invalid_date(raw, e.to_string()))
}

/// Normalize an instant to the calendar day it falls on in `tz`.
///
/// Derive "today" through this function only; UTC days and market-local
/// days differ around midnight.
#[must_use]
pub fn reference_date(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}
