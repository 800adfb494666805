use std::collections::{BTreeMap, HashSet, btree_map::Entry};

use augur_types::{
    ActualPriceRecord, Capability, ConfidenceInterval, DataQualityWarning, Horizon,
    PredictionRecord, Timeline, TimelinePoint,
};
use chrono::NaiveDate;

use super::audit::audit_point;
use super::classify::classify;
use super::dates::parse_calendar_date;

/// Merge realized prices and predictions into one date-keyed timeline.
///
/// - Points are keyed by calendar day and returned sorted ascending.
/// - Actual prices are seeded first; predictions are then classified against
///   `reference` and land in `past_predicted` or `future_predicted`.
/// - Same-date actuals and predictions are unioned into one point. A repeated
///   date within one feed is last-write-wins and reported as `DuplicateDate`;
///   a repeated prediction replaces the value, confidence and bands together.
/// - Intervals are ordered by level; a repeated level keeps the last one.
/// - Absent values stay `None`. A date that only has predictions yields a
///   point with `actual == None`, never zero.
///
/// Per-record defects never abort the merge: unparseable dates are reported as
/// `InvalidRecord`, NaN/infinite values as `NonFiniteValue`, and the record (or
/// field) is skipped. Every produced point is audited; interval bound
/// violations are reported, not corrected.
#[must_use]
pub fn merge(
    actuals: &[ActualPriceRecord],
    predictions: &[PredictionRecord],
    reference: NaiveDate,
) -> Timeline {
    let mut points: BTreeMap<NaiveDate, TimelinePoint> = BTreeMap::new();
    let mut warnings: Vec<DataQualityWarning> = Vec::new();

    let mut seen: HashSet<NaiveDate> = HashSet::new();
    for (index, rec) in actuals.iter().enumerate() {
        let Some(date) = parse_or_report(&rec.date, Capability::ActualPrices, index, &mut warnings)
        else {
            continue;
        };
        if !rec.price.is_finite() {
            report_non_finite(Capability::ActualPrices, date, &mut warnings);
            continue;
        }
        if !seen.insert(date) {
            warnings.push(DataQualityWarning::DuplicateDate {
                origin: Capability::ActualPrices,
                date,
            });
        }
        points
            .entry(date)
            .or_insert_with(|| TimelinePoint::empty(date))
            .actual = Some(rec.price);
    }

    seen.clear();
    for (index, rec) in predictions.iter().enumerate() {
        let Some(date) =
            parse_or_report(&rec.target_date, Capability::Predictions, index, &mut warnings)
        else {
            continue;
        };
        if !rec.predicted_value.is_finite() {
            report_non_finite(Capability::Predictions, date, &mut warnings);
            continue;
        }
        if !seen.insert(date) {
            warnings.push(DataQualityWarning::DuplicateDate {
                origin: Capability::Predictions,
                date,
            });
        }

        let point = match points.entry(date) {
            Entry::Vacant(v) => v.insert(TimelinePoint::empty(date)),
            Entry::Occupied(o) => o.into_mut(),
        };
        match classify(date, reference) {
            Horizon::Past => point.past_predicted = Some(rec.predicted_value),
            Horizon::Future => point.future_predicted = Some(rec.predicted_value),
        }

        // Confidence and bands belong to the record that set the value.
        point.confidence = match rec.confidence {
            Some(c) if c.is_finite() => Some(c),
            Some(_) => {
                report_non_finite(Capability::Predictions, date, &mut warnings);
                None
            }
            None => None,
        };

        point.intervals = None;
        if !rec.intervals.is_empty() {
            let (intervals, dropped) = normalize_intervals(&rec.intervals);
            if dropped {
                report_non_finite(Capability::Predictions, date, &mut warnings);
            }
            if !intervals.is_empty() {
                point.intervals = Some(intervals);
            }
        }
    }

    let points: Vec<TimelinePoint> = points.into_values().collect();
    for p in &points {
        warnings.extend(audit_point(p));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        actuals = actuals.len(),
        predictions = predictions.len(),
        points = points.len(),
        warnings = warnings.len(),
        %reference,
        "merged timeline"
    );

    Timeline { points, warnings }
}

fn parse_or_report(
    raw: &str,
    origin: Capability,
    index: usize,
    warnings: &mut Vec<DataQualityWarning>,
) -> Option<NaiveDate> {
    match parse_calendar_date(raw) {
        Ok(d) => Some(d),
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(%origin, index, input = raw, "skipping record with invalid date");
            warnings.push(DataQualityWarning::InvalidRecord {
                origin,
                index,
                error,
            });
            None
        }
    }
}

fn report_non_finite(origin: Capability, date: NaiveDate, warnings: &mut Vec<DataQualityWarning>) {
    #[cfg(feature = "tracing")]
    tracing::warn!(%origin, %date, "dropping non-finite value");
    warnings.push(DataQualityWarning::NonFiniteValue { origin, date });
}

/// Sort by level, keep the last interval per level, and drop intervals with
/// non-finite bounds. The flag reports whether anything was dropped.
fn normalize_intervals(raw: &[ConfidenceInterval]) -> (Vec<ConfidenceInterval>, bool) {
    let mut by_level: BTreeMap<u8, ConfidenceInterval> = BTreeMap::new();
    let mut dropped = false;
    for iv in raw {
        if iv.lower.is_finite() && iv.upper.is_finite() {
            by_level.insert(iv.level, *iv);
        } else {
            dropped = true;
        }
    }
    (by_level.into_values().collect(), dropped)
}
