use augur_types::{RangeMode, TimelinePoint, TrailingUnit};
use chrono::{Days, Months, NaiveDate};

/// First day a trailing window keeps.
///
/// Month and year steps are calendar-aware and clamp to the end of shorter
/// months (2024-03-31 minus one month is 2024-02-29). A start that would fall
/// before the representable calendar saturates to `NaiveDate::MIN`.
#[must_use]
pub fn trailing_start(reference: NaiveDate, unit: TrailingUnit, count: u32) -> NaiveDate {
    let start = match unit {
        TrailingUnit::Day => reference.checked_sub_days(Days::new(u64::from(count))),
        TrailingUnit::Week => reference.checked_sub_days(Days::new(u64::from(count) * 7)),
        TrailingUnit::Month => reference.checked_sub_months(Months::new(count)),
        TrailingUnit::Year => reference.checked_sub_months(Months::new(count.saturating_mul(12))),
    };
    start.unwrap_or(NaiveDate::MIN)
}

/// Slice a date-sorted timeline to `mode`.
///
/// - `Unbounded` keeps everything.
/// - `Trailing` keeps points with `date >= trailing_start(reference, ..)`,
///   forecasts after `reference` included.
/// - `Absolute` keeps `start <= date <= end`; an inverted range is empty.
///
/// `points` must be sorted ascending by date, as produced by
/// [`merge`](super::merge::merge). The input is never modified; an empty slice
/// is returned when nothing qualifies.
#[must_use]
pub fn window(points: &[TimelinePoint], mode: RangeMode, reference: NaiveDate) -> &[TimelinePoint] {
    match mode {
        RangeMode::Unbounded => points,
        RangeMode::Trailing { unit, count } => {
            let start = trailing_start(reference, unit, count);
            let lo = points.partition_point(|p| p.date < start);
            &points[lo..]
        }
        RangeMode::Absolute { start, end } => {
            let lo = points.partition_point(|p| p.date < start);
            let hi = points.partition_point(|p| p.date <= end);
            &points[lo..hi.max(lo)]
        }
    }
}
