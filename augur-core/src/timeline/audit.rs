//! Invariant checks for timeline points, including externally built ones.

use augur_types::{DataQualityWarning, TimelinePoint};

/// Report every invariant a single point violates.
///
/// Checks: both horizons populated, intervals out of level order, inverted
/// intervals, and a predicted value outside any of its intervals. Nothing is
/// corrected.
#[must_use]
pub fn audit_point(point: &TimelinePoint) -> Vec<DataQualityWarning> {
    let mut out = Vec::new();
    let date = point.date;

    if point.past_predicted.is_some() && point.future_predicted.is_some() {
        out.push(DataQualityWarning::ConflictingHorizons { date });
    }

    let Some(intervals) = point.intervals.as_deref() else {
        return out;
    };
    if intervals.windows(2).any(|w| w[0].level >= w[1].level) {
        out.push(DataQualityWarning::UnorderedIntervals { date });
    }
    let predicted = point.predicted();
    for iv in intervals {
        if iv.lower > iv.upper {
            out.push(DataQualityWarning::InvertedInterval {
                date,
                level: iv.level,
            });
            continue;
        }
        if let Some(v) = predicted
            && !iv.contains(v)
        {
            out.push(DataQualityWarning::IntervalOutOfBounds {
                date,
                level: iv.level,
                lower: iv.lower,
                upper: iv.upper,
                predicted: v,
            });
        }
    }
    out
}

/// Audit a point sequence: per-point checks plus strict ascending date order.
#[must_use]
pub fn audit(points: &[TimelinePoint]) -> Vec<DataQualityWarning> {
    let mut out: Vec<DataQualityWarning> = points
        .windows(2)
        .filter(|w| w[1].date <= w[0].date)
        .map(|w| DataQualityWarning::UnorderedTimeline { date: w[1].date })
        .collect();
    for p in points {
        out.extend(audit_point(p));
    }
    out
}
