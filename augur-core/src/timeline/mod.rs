//! Reconciliation and analytics over date-keyed price and prediction records.
//!
//! Modules, leaf-first:
//! - `dates`: parse source dates into calendar days; normalize "now"
//! - `classify`: graded vs forward-looking split against a reference day
//! - `merge`: union actuals and predictions into one sorted timeline
//! - `audit`: invariant checks that produce data-quality warnings
//! - `window`: trailing/absolute date windows
//! - `axis`: label stride for a window length
//! - `bands`: confidence band layers for stacked rendering
//! - `quality`: confidence scalar to quality tier
//! - `stats`: summary statistics of a field
//! - `accuracy`: grading of past predictions

/// Graded accuracy of past predictions.
pub mod accuracy;
/// Point and sequence invariant checks.
pub mod audit;
/// Axis label planning.
pub mod axis;
/// Confidence band projection.
pub mod bands;
/// Past/future classification.
pub mod classify;
/// Date parsing and reference-day normalization.
pub mod dates;
/// Timeline merging.
pub mod merge;
/// Quality tiers.
pub mod quality;
/// Summary statistics.
pub mod stats;
/// Date windows.
pub mod window;
