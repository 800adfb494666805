use core::fmt;
use serde::{Deserialize, Serialize};

/// The two record kinds a source can serve.
///
/// Used to label source errors, timeouts, and per-record warnings so a
/// report can say which feed a defect came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Realized market prices.
    ActualPrices,
    /// Model predictions, both graded and forward-looking.
    Predictions,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActualPrices => "actual-prices",
            Self::Predictions => "predictions",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
