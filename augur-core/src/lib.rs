//! augur-core
//!
//! Core reconciliation logic and source traits shared across the augur workspace.
//!
//! - `timeline`: merge realized prices with graded predictions and forecasts
//!   into one date-sorted timeline, then window, plan, project, and score it.
//! - `chart`: run the whole pipeline over fetched records into a `ChartReport`.
//! - `source`: the `RecordSource` trait and its price/prediction role traits.
//!
//! Everything outside `source` is synchronous and pure: the reference day is
//! always passed in, and defects are returned as warnings alongside results
//! instead of being logged or thrown.
#![warn(missing_docs)]

/// Pipeline composition into a render-ready report.
pub mod chart;
/// Record source traits implemented by data-access crates.
pub mod source;
/// Timeline reconciliation and analytics.
pub mod timeline;

pub use augur_types::*;
pub use chart::{ChartRequest, compose};
pub use source::{PredictionProvider, PriceProvider, RecordSource};
pub use timeline::accuracy::grade;
pub use timeline::audit::{audit, audit_point};
pub use timeline::axis::{label_dates, plan_interval};
pub use timeline::bands::{levels_present, project};
pub use timeline::classify::{classify, classify_raw};
pub use timeline::dates::{parse_calendar_date, reference_date};
pub use timeline::merge::merge;
pub use timeline::quality::{
    clamp_confidence, classify_quality, classify_quality_with, latest_confidence,
};
pub use timeline::stats::aggregate;
pub use timeline::window::{trailing_start, window};
