//! Augur reconciles realized prices with model predictions into render-ready charts.
//!
//! Overview
//! - Fetches actual prices and predictions from sources that implement the
//!   `augur_core` source contracts.
//! - Walks sources in priority order with per-source timeouts and falls back
//!   on failure or empty answers.
//! - Runs the synchronous `augur_core` pipeline: merge, window, axis plan,
//!   confidence bands, quality tier, statistics and accuracy grading.
//!
//! Key behaviors and trade-offs
//! - Partial data renders: if one feed cannot be fetched the chart is built
//!   from the other and carries a `MissingSource` warning. Only when both fail
//!   does `chart` return `AllSourcesFailed`.
//! - Record defects (bad dates, NaN values, intervals that miss the prediction)
//!   never fail a call; they surface as `DataQualityWarning`s on the report.
//! - The reference day defaults to today in the configured market timezone.
//!   Pin it via `ChartQuery::reference` for reproducible output.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use augur::{Augur, ChartQuery, RangePreset};
//!
//! let augur = Augur::builder()
//!     .with_source(Arc::new(MyWarehouseSource::new()))
//!     .default_range(RangePreset::ThreeMonths)
//!     .build()?;
//!
//! let report = augur.chart("AAPL", &ChartQuery::new().range(RangePreset::OneMonth)).await?;
//! for layer in &report.bands.layers {
//!     // draw widest band first
//! }
//! ```
//!
//! See `augur/examples/` for a runnable demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Augur, AugurBuilder};
pub use router::chart::ChartQuery;
pub use router::util::collapse_errors;

// Re-export core types for convenience
pub use augur_core::{
    AccuracyReport, ActualPriceRecord, AugurConfig, AugurError, BandLayer, BandLayers, BandSample,
    Capability, ChartReport, ChartRequest, ConfidenceInterval, DataQualityWarning, FieldSelector,
    LevelCoverage, PerformanceStats, PredictionProvider, PredictionRecord, PriceProvider,
    QualityThresholds, QualityTier, RangeMode, RangePreset, RecordSource, TimelinePoint,
    TrailingUnit, Trend, VisibleLevels,
};
