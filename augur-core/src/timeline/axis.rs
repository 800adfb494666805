use augur_types::TimelinePoint;
use chrono::NaiveDate;

/// Axis label stride for a window of `point_count` points.
///
/// Returns N meaning "label every Nth point"; 0 labels every point.
/// The step table keeps dense ranges legible without measuring labels:
///
/// | points    | interval |
/// |-----------|----------|
/// | ≤ 30      | 0        |
/// | ≤ 60      | 2        |
/// | ≤ 90      | 4        |
/// | ≤ 180     | 7        |
/// | ≤ 365     | 14       |
/// | otherwise | 30       |
#[must_use]
pub const fn plan_interval(point_count: usize) -> usize {
    match point_count {
        0..=30 => 0,
        31..=60 => 2,
        61..=90 => 4,
        91..=180 => 7,
        181..=365 => 14,
        _ => 30,
    }
}

/// Dates that carry an axis label under `interval`, starting with the first point.
#[must_use]
pub fn label_dates(points: &[TimelinePoint], interval: usize) -> Vec<NaiveDate> {
    points
        .iter()
        .step_by(interval.max(1))
        .map(|p| p.date)
        .collect()
}
