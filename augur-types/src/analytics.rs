//! Derived outputs computed over a windowed timeline.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Discrete model-quality tier derived from a confidence scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityTier {
    /// Below the medium threshold.
    Low,
    /// Between the medium and high thresholds.
    Medium,
    /// At or above the high threshold.
    High,
}

impl QualityTier {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Whether a chart should show a low-confidence caveat.
    #[must_use]
    pub const fn needs_caution(self) -> bool {
        matches!(self, Self::Low)
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction between the first and last present value of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    /// Last value above first.
    Up,
    /// Last value below first.
    Down,
    /// Equal first and last values.
    Flat,
}

/// Summary statistics of one field over a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Number of points where the field was present.
    pub count: usize,
    /// Arithmetic mean of present values.
    pub mean: f64,
    /// Largest present value.
    pub max: f64,
    /// Smallest present value.
    pub min: f64,
    /// First present value in date order.
    pub first: f64,
    /// Last present value in date order.
    pub last: f64,
    /// `last - first`.
    pub change: f64,
    /// Direction of `change`.
    pub trend: Trend,
}

impl PerformanceStats {
    /// `change` relative to `first`, in percent; `None` when `first` is zero.
    #[must_use]
    pub fn change_pct(&self) -> Option<f64> {
        (self.first != 0.0).then(|| self.change / self.first * 100.0)
    }
}

/// Observed coverage of one confidence level over graded points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelCoverage {
    /// Interval level in percent.
    pub level: u8,
    /// Graded points that carried this level.
    pub samples: usize,
    /// Of those, points whose actual price fell inside the interval.
    pub hits: usize,
}

impl LevelCoverage {
    /// `hits / samples` in `[0, 1]`; `None` without samples.
    #[must_use]
    pub fn rate(&self) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        (self.samples > 0).then(|| self.hits as f64 / self.samples as f64)
    }
}

/// Accuracy of graded predictions against realized prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Points carrying both an actual price and a graded prediction.
    pub samples: usize,
    /// Mean absolute error.
    pub mae: f64,
    /// Root mean squared error.
    pub rmse: f64,
    /// Mean absolute percentage error over non-zero actuals.
    pub mape: Option<f64>,
    /// Mean of `predicted - actual`.
    pub bias: f64,
    /// Share of consecutive graded pairs where the predicted move had the
    /// same direction as the realized move.
    pub direction_hit_rate: Option<f64>,
    /// Per-level band coverage, ascending by level.
    pub coverage: Vec<LevelCoverage>,
}

/// One point of a confidence band layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandSample {
    /// Day of the underlying timeline point.
    pub date: NaiveDate,
    /// `(lower, upper)` when the point carries this level.
    pub bounds: Option<(f64, f64)>,
}

/// Band boundaries for one confidence level, aligned with the windowed points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandLayer {
    /// Interval level in percent.
    pub level: u8,
    /// One sample per point, in date order.
    pub samples: Vec<BandSample>,
}

impl BandLayer {
    /// True when no point carried this level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.iter().all(|s| s.bounds.is_none())
    }

    /// Samples that carry bounds.
    pub fn present(&self) -> impl Iterator<Item = &BandSample> {
        self.samples.iter().filter(|s| s.bounds.is_some())
    }
}

/// Band layers sorted by descending level; draw in order (widest first).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BandLayers {
    /// Layers, highest level first.
    pub layers: Vec<BandLayer>,
}

impl BandLayers {
    /// Layer for `level`, if it was requested.
    #[must_use]
    pub fn get(&self, level: u8) -> Option<&BandLayer> {
        self.layers.iter().find(|l| l.level == level)
    }

    /// Levels in draw order.
    pub fn levels(&self) -> impl Iterator<Item = u8> + '_ {
        self.layers.iter().map(|l| l.level)
    }
}
