use augur_types::{AugurError, Horizon};
use chrono::NaiveDate;

use super::dates::parse_calendar_date;

/// Decide whether a prediction about `target` is graded or a forecast.
///
/// The reference day itself counts as resolved: `target == reference` is
/// `Past`, `target == reference + 1 day` is `Future`. Both dates must
/// already be calendar days (see [`reference_date`](super::dates::reference_date)).
#[must_use]
pub fn classify(target: NaiveDate, reference: NaiveDate) -> Horizon {
    if target <= reference {
        Horizon::Past
    } else {
        Horizon::Future
    }
}

/// [`classify`] for a raw source date string.
///
/// # Errors
/// Returns `AugurError::InvalidDate` if `target` cannot be parsed.
pub fn classify_raw(target: &str, reference: NaiveDate) -> Result<Horizon, AugurError> {
    parse_calendar_date(target).map(|d| classify(d, reference))
}
