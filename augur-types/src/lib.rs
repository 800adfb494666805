//! Augur data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod analytics;
mod capability;
mod config;
mod error;
mod record;
mod reports;
mod warning;

pub use analytics::{
    AccuracyReport, BandLayer, BandLayers, BandSample, LevelCoverage, PerformanceStats,
    QualityTier, Trend,
};
pub use capability::Capability;
pub use config::{
    AugurConfig, KNOWN_LEVELS, QualityThresholds, RangeMode, RangePreset, TrailingUnit,
    VisibleLevels,
};
pub use error::AugurError;
pub use record::{
    ActualPriceRecord, ConfidenceInterval, FieldSelector, Horizon, PredictionRecord,
    TimelinePoint,
};
pub use reports::{ChartReport, Timeline};
pub use warning::DataQualityWarning;
