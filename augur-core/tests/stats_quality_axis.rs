use augur_core::{
    AugurError, FieldSelector, QualityThresholds, QualityTier, TimelinePoint, Trend, aggregate,
    clamp_confidence, classify_quality, classify_quality_with, label_dates, latest_confidence,
    plan_interval,
};
use chrono::{Days, NaiveDate};

fn d(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

fn actual_series(values: &[Option<f64>]) -> Vec<TimelinePoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let mut p = TimelinePoint::empty(d(i as u64));
            p.actual = *v;
            p
        })
        .collect()
}

#[test]
fn stats_exclude_absent_values() {
    let pts = actual_series(&[Some(10.0), None, Some(30.0), None, Some(20.0)]);
    let s = aggregate(&pts, FieldSelector::Actual).unwrap();
    assert_eq!(s.count, 3);
    assert_eq!(s.mean, 20.0);
    assert_eq!(s.min, 10.0);
    assert_eq!(s.max, 30.0);
    assert_eq!(s.first, 10.0);
    assert_eq!(s.last, 20.0);
    assert_eq!(s.change, 10.0);
    assert_eq!(s.trend, Trend::Up);
    assert_eq!(s.change_pct(), Some(100.0));
}

#[test]
fn trend_direction_from_first_and_last() {
    let down = aggregate(&actual_series(&[Some(5.0), Some(9.0), Some(4.0)]), FieldSelector::Actual)
        .unwrap();
    assert_eq!(down.trend, Trend::Down);

    let flat = aggregate(&actual_series(&[Some(5.0), Some(1.0), Some(5.0)]), FieldSelector::Actual)
        .unwrap();
    assert_eq!(flat.trend, Trend::Flat);

    let single = aggregate(&actual_series(&[None, Some(0.0)]), FieldSelector::Actual).unwrap();
    assert_eq!(single.trend, Trend::Flat);
    assert_eq!(single.mean, 0.0);
    assert_eq!(single.change_pct(), None);
}

#[test]
fn stats_over_missing_field_is_insufficient_data() {
    let pts = actual_series(&[Some(1.0), Some(2.0)]);
    let err = aggregate(&pts, FieldSelector::FuturePredicted).unwrap_err();
    assert!(matches!(err, AugurError::InsufficientData { .. }));
    assert!(!err.is_actionable());
    assert!(aggregate(&[], FieldSelector::Actual).is_err());
}

#[test]
fn predicted_selector_reads_either_horizon() {
    let mut past = TimelinePoint::empty(d(0));
    past.past_predicted = Some(10.0);
    let mut future = TimelinePoint::empty(d(1));
    future.future_predicted = Some(14.0);
    let s = aggregate(&[past, future], FieldSelector::Predicted).unwrap();
    assert_eq!(s.count, 2);
    assert_eq!(s.mean, 12.0);
}

#[test]
fn quality_tiers_use_fixed_thresholds() {
    assert_eq!(classify_quality(0.85), QualityTier::High);
    assert_eq!(classify_quality(0.8), QualityTier::High);
    assert_eq!(classify_quality(0.65), QualityTier::Medium);
    assert_eq!(classify_quality(0.6), QualityTier::Medium);
    assert_eq!(classify_quality(0.3), QualityTier::Low);
    assert_eq!(classify_quality(f64::NAN), QualityTier::Low);
    // Out-of-range input is not validated.
    assert_eq!(classify_quality(7.0), QualityTier::High);

    let strict = QualityThresholds {
        high: 0.9,
        medium: 0.7,
    };
    assert_eq!(classify_quality_with(0.85, strict), QualityTier::Medium);
}

#[test]
fn clamp_confidence_bounds_input() {
    assert_eq!(clamp_confidence(1.4), 1.0);
    assert_eq!(clamp_confidence(-0.2), 0.0);
    assert_eq!(clamp_confidence(f64::NAN), 0.0);
    assert_eq!(clamp_confidence(0.42), 0.42);
}

#[test]
fn latest_confidence_prefers_forecasts() {
    let mut graded = TimelinePoint::empty(d(0));
    graded.past_predicted = Some(1.0);
    graded.confidence = Some(0.9);
    let mut forecast = TimelinePoint::empty(d(1));
    forecast.future_predicted = Some(1.0);
    forecast.confidence = Some(0.5);
    let mut later_graded = TimelinePoint::empty(d(2));
    later_graded.past_predicted = Some(1.0);
    later_graded.confidence = Some(0.7);

    let pts = vec![graded.clone(), forecast, later_graded.clone()];
    assert_eq!(latest_confidence(&pts), Some(0.5));
    assert_eq!(latest_confidence(&[graded, later_graded]), Some(0.7));
    assert_eq!(latest_confidence(&[]), None);
}

#[test]
fn axis_interval_steps() {
    assert_eq!(plan_interval(0), 0);
    assert_eq!(plan_interval(30), 0);
    assert_eq!(plan_interval(31), 2);
    assert_eq!(plan_interval(45), 2);
    assert_eq!(plan_interval(60), 2);
    assert_eq!(plan_interval(90), 4);
    assert_eq!(plan_interval(180), 7);
    assert_eq!(plan_interval(365), 14);
    assert_eq!(plan_interval(366), 30);
    assert_eq!(plan_interval(400), 30);

    let mut prev = 0;
    for n in 0..1000 {
        let cur = plan_interval(n);
        assert!(cur >= prev);
        prev = cur;
    }
}

#[test]
fn label_dates_take_every_nth_point() {
    let pts = actual_series(&[Some(1.0); 7]);
    assert_eq!(label_dates(&pts, 0).len(), 7);
    assert_eq!(label_dates(&pts, 1).len(), 7);
    assert_eq!(label_dates(&pts, 3), vec![d(0), d(3), d(6)]);
    assert!(label_dates(&[], 14).is_empty());
}
