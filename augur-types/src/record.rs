//! Raw source records and the merged timeline point.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A realized closing price for one trading date, as delivered by a source.
///
/// `date` is kept verbatim; it is parsed (and its time-of-day stripped)
/// during merging so a single malformed row can be reported without
/// rejecting the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualPriceRecord {
    /// ISO `YYYY-MM-DD` date or RFC 3339 timestamp.
    pub date: String,
    /// Realized price. Zero is a legitimate value.
    pub price: f64,
}

impl ActualPriceRecord {
    /// Build a record from a raw date string.
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }

    /// Build a record from an already-parsed calendar day.
    #[must_use]
    pub fn on(date: NaiveDate, price: f64) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            price,
        }
    }
}

/// A `[lower, upper]` band around a prediction at a stated probability level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Probability level in percent (e.g. 90, 95, 99).
    pub level: u8,
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Construct an interval.
    #[must_use]
    pub const fn new(level: u8, lower: f64, upper: f64) -> Self {
        Self {
            level,
            lower,
            upper,
        }
    }

    /// Whether `value` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// `upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// A model prediction about `target_date`.
///
/// `target_date` is the day the prediction is about, not the day it was
/// produced. Whether the record is graded (past) or a forecast (future)
/// depends on the reference date it is merged against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// ISO `YYYY-MM-DD` date or RFC 3339 timestamp.
    pub target_date: String,
    /// Predicted price.
    pub predicted_value: f64,
    /// Optional model confidence scalar in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Optional nested confidence intervals; order is not significant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intervals: Vec<ConfidenceInterval>,
}

impl PredictionRecord {
    /// Build a bare prediction with no confidence data.
    pub fn new(target_date: impl Into<String>, predicted_value: f64) -> Self {
        Self {
            target_date: target_date.into(),
            predicted_value,
            confidence: None,
            intervals: Vec::new(),
        }
    }

    /// Attach a confidence scalar.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Attach one confidence interval.
    #[must_use]
    pub fn with_interval(mut self, level: u8, lower: f64, upper: f64) -> Self {
        self.intervals.push(ConfidenceInterval::new(level, lower, upper));
        self
    }
}

/// Which side of the reference date a prediction falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    /// Target date has occurred (inclusive of the reference day); graded.
    Past,
    /// Target date is after the reference day; a forecast.
    Future,
}

/// One row of a reconciled timeline.
///
/// Absent values are `None` and must never be plotted as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Calendar day; unique within a timeline.
    pub date: NaiveDate,
    /// Realized price.
    pub actual: Option<f64>,
    /// Graded prediction (target date on or before the reference day).
    pub past_predicted: Option<f64>,
    /// Forecast (target date after the reference day).
    pub future_predicted: Option<f64>,
    /// Confidence intervals sorted ascending by level.
    pub intervals: Option<Vec<ConfidenceInterval>>,
    /// Model confidence scalar.
    pub confidence: Option<f64>,
}

impl TimelinePoint {
    /// An empty point for `date`.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            actual: None,
            past_predicted: None,
            future_predicted: None,
            intervals: None,
            confidence: None,
        }
    }

    /// The predicted value regardless of horizon.
    ///
    /// When both horizons are populated (a defect) the graded value wins.
    #[must_use]
    pub fn predicted(&self) -> Option<f64> {
        self.past_predicted.or(self.future_predicted)
    }

    /// Horizon of the prediction carried by this point, if any.
    #[must_use]
    pub const fn horizon(&self) -> Option<Horizon> {
        match (self.past_predicted, self.future_predicted) {
            (Some(_), _) => Some(Horizon::Past),
            (None, Some(_)) => Some(Horizon::Future),
            (None, None) => None,
        }
    }

    /// The interval at `level`, if this point carries one.
    #[must_use]
    pub fn interval(&self, level: u8) -> Option<&ConfidenceInterval> {
        self.intervals
            .as_deref()
            .and_then(|ivs| ivs.iter().find(|iv| iv.level == level))
    }
}

/// Selects one numeric field of a [`TimelinePoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FieldSelector {
    /// `actual`.
    Actual,
    /// `past_predicted`.
    PastPredicted,
    /// `future_predicted`.
    FuturePredicted,
    /// Either prediction field.
    Predicted,
    /// `confidence`.
    Confidence,
}

impl FieldSelector {
    /// Read the selected field from `point`.
    #[must_use]
    pub fn read(self, point: &TimelinePoint) -> Option<f64> {
        match self {
            Self::Actual => point.actual,
            Self::PastPredicted => point.past_predicted,
            Self::FuturePredicted => point.future_predicted,
            Self::Predicted => point.predicted(),
            Self::Confidence => point.confidence,
        }
    }

    /// Stable label for logs and placeholder messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actual => "actual",
            Self::PastPredicted => "past-predicted",
            Self::FuturePredicted => "future-predicted",
            Self::Predicted => "predicted",
            Self::Confidence => "confidence",
        }
    }
}
