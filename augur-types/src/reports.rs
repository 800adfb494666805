//! Report envelopes produced by the merger and the orchestrator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::{AccuracyReport, BandLayers, PerformanceStats, QualityTier};
use crate::config::RangeMode;
use crate::record::TimelinePoint;
use crate::warning::DataQualityWarning;

/// Merged, date-sorted timeline plus the non-fatal issues found while merging.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Points sorted ascending by date, one per distinct date.
    pub points: Vec<TimelinePoint>,
    /// Non-fatal issues encountered while building the timeline.
    pub warnings: Vec<DataQualityWarning>,
}

impl Timeline {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point for `date`, if present.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&TimelinePoint> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| &self.points[i])
    }
}

/// Render-ready view model for one prediction chart.
///
/// Statistics that could not be computed are `None`; the chart shows a
/// placeholder for them instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReport {
    /// Symbol the chart refers to.
    pub symbol: String,
    /// Day used to split graded predictions from forecasts.
    pub reference: NaiveDate,
    /// Window that was applied.
    pub range: RangeMode,
    /// Windowed points in date order.
    pub points: Vec<TimelinePoint>,
    /// Show every Nth axis label; 0 shows all.
    pub label_interval: usize,
    /// Confidence band layers in draw order.
    pub bands: BandLayers,
    /// Quality tier of the most recent forecast confidence.
    pub quality: Option<QualityTier>,
    /// Summary of realized prices in the window.
    pub price_stats: Option<PerformanceStats>,
    /// Summary of forecasts in the window.
    pub forecast_stats: Option<PerformanceStats>,
    /// Grading of past predictions in the window.
    pub accuracy: Option<AccuracyReport>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<DataQualityWarning>,
}

impl ChartReport {
    /// True when there is nothing to plot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the chart should render an inline data-quality notice.
    #[must_use]
    pub fn has_defects(&self) -> bool {
        self.warnings.iter().any(DataQualityWarning::is_defect)
    }
}
