use async_trait::async_trait;

use augur_types::{ActualPriceRecord, AugurError, Capability, PredictionRecord};

/// Focused role trait for sources that serve realized prices.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch realized price records for `symbol`.
    ///
    /// Records are returned as delivered; dates are validated during merging.
    async fn actual_prices(&self, symbol: &str) -> Result<Vec<ActualPriceRecord>, AugurError>;
}

/// Focused role trait for sources that serve model predictions.
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    /// Fetch prediction records (graded and forward-looking) for `symbol`.
    async fn predictions(&self, symbol: &str) -> Result<Vec<PredictionRecord>, AugurError>;
}

/// Main source trait implemented by data-access crates. Exposes capability discovery.
pub trait RecordSource: Send + Sync {
    /// A stable identifier used in errors and logs (e.g. "augur-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise price capability by returning a usable trait object reference when supported.
    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        None
    }

    /// Advertise prediction capability by returning a usable trait object reference when supported.
    fn as_prediction_provider(&self) -> Option<&dyn PredictionProvider> {
        None
    }

    /// Whether the source advertises `capability`.
    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::ActualPrices => self.as_price_provider().is_some(),
            Capability::Predictions => self.as_prediction_provider().is_some(),
        }
    }
}
