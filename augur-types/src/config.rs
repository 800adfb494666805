//! Configuration types shared by the core pipeline and the orchestrator.

use core::fmt;
use core::str::FromStr;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::AugurError;

/// Confidence levels (in percent) the prediction feed is known to emit.
pub const KNOWN_LEVELS: [u8; 3] = [90, 95, 99];

/// Calendar unit for trailing windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrailingUnit {
    /// Calendar days.
    Day,
    /// Seven-day weeks.
    Week,
    /// Calendar months; end-of-month dates clamp (Mar 31 - 1 month = Feb 28/29).
    Month,
    /// Calendar years (twelve months).
    Year,
}

/// Date window applied to a merged timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangeMode {
    /// Keep every point.
    #[default]
    Unbounded,
    /// Keep points on or after `reference - count * unit`.
    Trailing {
        /// Calendar unit.
        unit: TrailingUnit,
        /// Number of units back from the reference date.
        count: u32,
    },
    /// Keep points with `start <= date <= end`.
    Absolute {
        /// Inclusive start.
        start: NaiveDate,
        /// Inclusive end.
        end: NaiveDate,
    },
}

impl RangeMode {
    /// Shorthand for `Trailing { unit: Month, count }`.
    #[must_use]
    pub const fn months(count: u32) -> Self {
        Self::Trailing {
            unit: TrailingUnit::Month,
            count,
        }
    }
}

/// Range selector choices offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RangePreset {
    /// Trailing month.
    OneMonth,
    /// Trailing quarter.
    #[default]
    ThreeMonths,
    /// Trailing half year.
    SixMonths,
    /// Trailing year.
    OneYear,
    /// Everything available.
    All,
}

impl RangePreset {
    /// All presets in selector order.
    pub const ALL: [Self; 5] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::All,
    ];

    /// Short selector label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::All => "ALL",
        }
    }

    /// Window this preset selects.
    #[must_use]
    pub const fn mode(self) -> RangeMode {
        match self {
            Self::OneMonth => RangeMode::months(1),
            Self::ThreeMonths => RangeMode::months(3),
            Self::SixMonths => RangeMode::months(6),
            Self::OneYear => RangeMode::Trailing {
                unit: TrailingUnit::Year,
                count: 1,
            },
            Self::All => RangeMode::Unbounded,
        }
    }
}

impl From<RangePreset> for RangeMode {
    fn from(p: RangePreset) -> Self {
        p.mode()
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangePreset {
    type Err = AugurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AugurError::InvalidArg(format!("unknown range preset: {s}")))
    }
}

/// Thresholds mapping a confidence scalar to a quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityThresholds {
    /// Scalars at or above this are `High`.
    pub high: f64,
    /// Scalars at or above this (and below `high`) are `Medium`.
    pub medium: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            high: 0.8,
            medium: 0.6,
        }
    }
}

/// Set of confidence levels whose bands are currently shown.
///
/// Toggling is pure set membership; it never touches the underlying data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleLevels(BTreeSet<u8>);

impl VisibleLevels {
    /// No bands visible.
    #[must_use]
    pub const fn none() -> Self {
        Self(BTreeSet::new())
    }

    /// Whether `level` is visible.
    #[must_use]
    pub fn contains(&self, level: u8) -> bool {
        self.0.contains(&level)
    }

    /// Show `level`. Returns true if it was hidden.
    pub fn insert(&mut self, level: u8) -> bool {
        self.0.insert(level)
    }

    /// Hide `level`. Returns true if it was shown.
    pub fn remove(&mut self, level: u8) -> bool {
        self.0.remove(&level)
    }

    /// Flip visibility of `level`; returns the new state.
    pub fn toggle(&mut self, level: u8) -> bool {
        if self.0.remove(&level) {
            false
        } else {
            self.0.insert(level);
            true
        }
    }

    /// Visible levels in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Number of visible levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for VisibleLevels {
    fn default() -> Self {
        KNOWN_LEVELS.into_iter().collect()
    }
}

impl FromIterator<u8> for VisibleLevels {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Global configuration for the `Augur` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugurConfig {
    /// Market timezone used to normalize "now" into a reference calendar day.
    pub timezone: Tz,
    /// Range applied when a request does not name one.
    pub default_range: RangePreset,
    /// Bands shown when a request does not name any.
    pub visible_levels: VisibleLevels,
    /// Quality tier thresholds.
    pub quality: QualityThresholds,
    /// Timeout for individual source requests.
    pub source_timeout: Duration,
    /// Optional overall deadline for fetching both feeds.
    pub request_timeout: Option<Duration>,
    /// Per-symbol source order (by source name). Unlisted sources keep
    /// registration order after the listed ones.
    #[serde(default)]
    pub symbol_priority: BTreeMap<String, Vec<String>>,
}

impl Default for AugurConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::New_York,
            default_range: RangePreset::default(),
            visible_levels: VisibleLevels::default(),
            quality: QualityThresholds::default(),
            source_timeout: Duration::from_secs(5),
            request_timeout: None,
            symbol_priority: BTreeMap::new(),
        }
    }
}
