use augur_types::{QualityThresholds, QualityTier, TimelinePoint};

/// Map a confidence scalar to a tier with the default thresholds
/// (`>= 0.8` High, `>= 0.6` Medium, otherwise Low).
///
/// Range is not validated; clamp with [`clamp_confidence`] first. NaN is `Low`.
#[must_use]
pub fn classify_quality(scalar: f64) -> QualityTier {
    classify_quality_with(scalar, QualityThresholds::default())
}

/// [`classify_quality`] with explicit thresholds.
#[must_use]
pub fn classify_quality_with(scalar: f64, thresholds: QualityThresholds) -> QualityTier {
    if scalar >= thresholds.high {
        QualityTier::High
    } else if scalar >= thresholds.medium {
        QualityTier::Medium
    } else {
        QualityTier::Low
    }
}

/// Clamp into `[0, 1]`; NaN becomes 0.
#[must_use]
pub fn clamp_confidence(scalar: f64) -> f64 {
    if scalar.is_nan() {
        0.0
    } else {
        scalar.clamp(0.0, 1.0)
    }
}

/// Confidence of the latest forecast, falling back to the latest point that
/// carries one.
#[must_use]
pub fn latest_confidence(points: &[TimelinePoint]) -> Option<f64> {
    points
        .iter()
        .rev()
        .find(|p| p.future_predicted.is_some() && p.confidence.is_some())
        .or_else(|| points.iter().rev().find(|p| p.confidence.is_some()))
        .and_then(|p| p.confidence)
}
