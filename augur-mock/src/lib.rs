use std::time::Duration;

use async_trait::async_trait;
use augur_core::{
    ActualPriceRecord, AugurError, PredictionProvider, PredictionRecord, PriceProvider,
    RecordSource,
};
use chrono::NaiveDate;

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Symbols:
/// - `AAPL`: ~six months of prices, thirty graded predictions, thirty banded forecasts.
/// - `MSFT`: a short, older price history with unbanded predictions.
/// - `NEWCO`: forecasts only; prices are `NotFound`.
/// - `BAD`: malformed, duplicated, and non-finite records in both feeds.
/// - `FAIL`: every call fails.
/// - `TIMEOUT`: every call sleeps briefly before answering like `AAPL`.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// How long `TIMEOUT` calls stall.
    pub const STALL: Duration = Duration::from_millis(200);

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The day the fixtures treat as today; pass it as the chart reference.
    #[must_use]
    pub fn reference_date() -> NaiveDate {
        fixtures::reference()
    }

    fn not_found(what: &str) -> AugurError {
        AugurError::not_found(what.to_string())
    }

    /// Resolve the fixture symbol to serve, failing or stalling for the
    /// special symbols.
    async fn maybe_fail_or_timeout<'a>(
        symbol: &'a str,
        capability: &'static str,
    ) -> Result<&'a str, AugurError> {
        match symbol {
            "FAIL" => Err(AugurError::source(
                "augur-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Kept short; orchestrators may time out depending on config.
                tokio::time::sleep(Self::STALL).await;
                Ok("AAPL")
            }
            s => Ok(s),
        }
    }
}

impl RecordSource for MockSource {
    fn name(&self) -> &'static str {
        "augur-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }

    fn as_prediction_provider(&self) -> Option<&dyn PredictionProvider> {
        Some(self as &dyn PredictionProvider)
    }
}

#[async_trait]
impl PriceProvider for MockSource {
    async fn actual_prices(&self, symbol: &str) -> Result<Vec<ActualPriceRecord>, AugurError> {
        let s = Self::maybe_fail_or_timeout(symbol, "actual-prices").await?;
        fixtures::prices::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("actual prices for {symbol}")))
    }
}

#[async_trait]
impl PredictionProvider for MockSource {
    async fn predictions(&self, symbol: &str) -> Result<Vec<PredictionRecord>, AugurError> {
        let s = Self::maybe_fail_or_timeout(symbol, "predictions").await?;
        fixtures::predictions::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("predictions for {symbol}")))
    }
}
