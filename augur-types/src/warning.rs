use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::error::AugurError;

/// Non-fatal defect attached to a merged timeline or a chart report.
///
/// Warnings never abort reconciliation; a chart renders the remaining data
/// with an inline notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DataQualityWarning {
    /// A record was skipped because it could not be parsed.
    InvalidRecord {
        /// Feed the record came from.
        origin: Capability,
        /// Position of the record in its input batch.
        index: usize,
        /// Why it was rejected.
        error: AugurError,
    },
    /// A record, or one of its optional fields, was dropped because a value
    /// was NaN or infinite.
    NonFiniteValue {
        /// Feed the record came from.
        origin: Capability,
        /// Day the record referred to.
        date: NaiveDate,
    },
    /// A feed repeated a date; the later record won.
    DuplicateDate {
        /// Feed the duplicate came from.
        origin: Capability,
        /// Repeated day.
        date: NaiveDate,
    },
    /// A point carries both a graded and a forward-looking prediction.
    ConflictingHorizons {
        /// Offending day.
        date: NaiveDate,
    },
    /// The predicted value lies outside one of its confidence intervals.
    IntervalOutOfBounds {
        /// Offending day.
        date: NaiveDate,
        /// Interval level in percent.
        level: u8,
        /// Interval lower bound.
        lower: f64,
        /// Interval upper bound.
        upper: f64,
        /// Predicted value that escaped the interval.
        predicted: f64,
    },
    /// An interval has `lower > upper`.
    InvertedInterval {
        /// Offending day.
        date: NaiveDate,
        /// Interval level in percent.
        level: u8,
    },
    /// A point's intervals are not sorted ascending by level.
    UnorderedIntervals {
        /// Offending day.
        date: NaiveDate,
    },
    /// A point sequence is not strictly ascending by date.
    UnorderedTimeline {
        /// First date found out of order.
        date: NaiveDate,
    },
    /// An entire feed could not be fetched; the chart shows the other one only.
    MissingSource {
        /// Feed that is missing.
        origin: Capability,
        /// Underlying failure.
        error: AugurError,
    },
}

impl DataQualityWarning {
    /// Day the warning refers to, when it is tied to a single point.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::NonFiniteValue { date, .. }
            | Self::DuplicateDate { date, .. }
            | Self::ConflictingHorizons { date }
            | Self::IntervalOutOfBounds { date, .. }
            | Self::InvertedInterval { date, .. }
            | Self::UnorderedIntervals { date }
            | Self::UnorderedTimeline { date } => Some(*date),
            Self::InvalidRecord { .. } | Self::MissingSource { .. } => None,
        }
    }

    /// Whether the warning signals a data defect worth showing to the user.
    ///
    /// Duplicate dates are resolved deterministically and are informational.
    #[must_use]
    pub const fn is_defect(&self) -> bool {
        !matches!(self, Self::DuplicateDate { .. })
    }
}
