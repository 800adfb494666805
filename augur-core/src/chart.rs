//! End-to-end chart composition over already-fetched records.

use augur_types::{
    ActualPriceRecord, ChartReport, FieldSelector, PredictionRecord, QualityThresholds,
    RangeMode, VisibleLevels,
};
use chrono::NaiveDate;

use crate::timeline::{
    accuracy::grade,
    axis::plan_interval,
    bands::project,
    merge::merge,
    quality::{classify_quality_with, latest_confidence},
    stats::aggregate,
    window::window,
};

/// Fully resolved inputs for one chart: the reference day and the caller's UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    /// Day separating graded predictions from forecasts.
    pub reference: NaiveDate,
    /// Window to apply.
    pub range: RangeMode,
    /// Confidence levels to emit band layers for.
    pub visible_levels: VisibleLevels,
    /// Tier thresholds for the forecast confidence.
    pub quality: QualityThresholds,
}

impl ChartRequest {
    /// Request for `reference` with an unbounded range and the default levels/thresholds.
    #[must_use]
    pub fn new(reference: NaiveDate) -> Self {
        Self {
            reference,
            range: RangeMode::Unbounded,
            visible_levels: VisibleLevels::default(),
            quality: QualityThresholds::default(),
        }
    }

    /// Replace the range.
    #[must_use]
    pub fn range(mut self, range: impl Into<RangeMode>) -> Self {
        self.range = range.into();
        self
    }

    /// Replace the visible band levels.
    #[must_use]
    pub fn visible_levels(mut self, levels: VisibleLevels) -> Self {
        self.visible_levels = levels;
        self
    }

    /// Replace the quality thresholds.
    #[must_use]
    pub const fn quality(mut self, thresholds: QualityThresholds) -> Self {
        self.quality = thresholds;
        self
    }
}

/// Run the whole reconciliation pipeline and package a render-ready report.
///
/// merge → window → axis interval → bands → quality tier → price/forecast
/// stats → accuracy. Statistics that cannot be computed over the window are
/// `None` so the chart can show a placeholder; merge warnings are carried
/// through unchanged.
#[must_use]
pub fn compose(
    symbol: &str,
    request: &ChartRequest,
    actuals: &[ActualPriceRecord],
    predictions: &[PredictionRecord],
) -> ChartReport {
    let timeline = merge(actuals, predictions, request.reference);
    let windowed = window(&timeline.points, request.range, request.reference);

    let quality =
        latest_confidence(windowed).map(|c| classify_quality_with(c, request.quality));

    ChartReport {
        symbol: symbol.to_string(),
        reference: request.reference,
        range: request.range,
        label_interval: plan_interval(windowed.len()),
        bands: project(windowed, &request.visible_levels),
        quality,
        price_stats: aggregate(windowed, FieldSelector::Actual).ok(),
        forecast_stats: aggregate(windowed, FieldSelector::FuturePredicted).ok(),
        accuracy: grade(windowed).ok(),
        points: windowed.to_vec(),
        warnings: timeline.warnings,
    }
}
