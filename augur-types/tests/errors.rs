use augur_types::{AugurError, Capability, DataQualityWarning, QualityTier};
use chrono::NaiveDate;

#[test]
fn placeholder_states_are_not_actionable() {
    assert!(!AugurError::insufficient("actual stats").is_actionable());
    assert!(!AugurError::not_found("predictions for ZZZ").is_actionable());
    assert!(AugurError::invalid_date("2024-13-01", "month out of range").is_actionable());

    let quiet = AugurError::AllSourcesFailed(vec![AugurError::not_found("a")]);
    assert!(!quiet.is_actionable());
    let loud = AugurError::AllSourcesFailed(vec![
        AugurError::not_found("a"),
        AugurError::source_timeout("mock", Capability::Predictions.as_str()),
    ]);
    assert!(loud.is_actionable());
}

#[test]
fn flatten_unwraps_nested_aggregates() {
    let nested = AugurError::AllSourcesFailed(vec![
        AugurError::source("a", "boom"),
        AugurError::AllSourcesFailed(vec![
            AugurError::request_timeout("actual-prices"),
            AugurError::not_found("b"),
        ]),
    ]);
    let flat = nested.flatten();
    assert_eq!(flat.len(), 3);
    assert!(matches!(flat[0], AugurError::Source { .. }));
    assert!(matches!(flat[1], AugurError::RequestTimeout { .. }));
}

#[test]
fn error_serde_roundtrip() {
    let err = AugurError::invalid_date("yesterday", "input contains invalid characters");
    let json = serde_json::to_string(&err).unwrap();
    let de: AugurError = serde_json::from_str(&json).unwrap();
    assert_eq!(de, err);
}

#[test]
fn duplicate_dates_are_informational() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let dup = DataQualityWarning::DuplicateDate {
        origin: Capability::ActualPrices,
        date,
    };
    assert!(!dup.is_defect());
    assert_eq!(dup.date(), Some(date));

    let conflict = DataQualityWarning::ConflictingHorizons { date };
    assert!(conflict.is_defect());

    let missing = DataQualityWarning::MissingSource {
        origin: Capability::Predictions,
        error: AugurError::source("mock", "down"),
    };
    assert_eq!(missing.date(), None);
}

#[test]
fn quality_tiers_order_and_label() {
    assert!(QualityTier::High > QualityTier::Medium);
    assert!(QualityTier::Medium > QualityTier::Low);
    assert_eq!(QualityTier::Medium.to_string(), "Medium");
    assert!(QualityTier::Low.needs_caution());
    assert!(!QualityTier::High.needs_caution());
}
