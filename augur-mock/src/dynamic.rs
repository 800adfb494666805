use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use augur_core::{
    ActualPriceRecord, AugurError, Capability, PredictionProvider, PredictionRecord,
    PriceProvider, RecordSource,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(AugurError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    price_rules: HashMap<String, MockBehavior<Vec<ActualPriceRecord>>>,
    prediction_rules: HashMap<String, MockBehavior<Vec<PredictionRecord>>>,
    calls: Vec<(Capability, String)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `actual_prices` calls for a specific symbol.
    pub async fn set_price_behavior(
        &self,
        symbol: &str,
        behavior: MockBehavior<Vec<ActualPriceRecord>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.price_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `predictions` calls for a specific symbol.
    pub async fn set_prediction_behavior(
        &self,
        symbol: &str,
        behavior: MockBehavior<Vec<PredictionRecord>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.prediction_rules.insert(symbol.to_string(), behavior);
    }

    /// Return a copy of the call log, in call order.
    pub async fn calls(&self) -> Vec<(Capability, String)> {
        self.state.lock().await.calls.clone()
    }

    /// Number of calls made for `capability`.
    pub async fn call_count(&self, capability: Capability) -> usize {
        let guard = self.state.lock().await;
        guard.calls.iter().filter(|(c, _)| *c == capability).count()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.price_rules.clear();
        guard.prediction_rules.clear();
        guard.calls.clear();
    }
}

/// A source that defers all behavior to an external controller.
///
/// Symbols without a configured rule fail with `NotFound`.
pub struct DynamicMockSource {
    name: &'static str,
    prices: bool,
    predictions: bool,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a dynamic mock serving both feeds, and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn RecordSource>, DynamicMockController) {
        Self::with_capabilities(name, &[Capability::ActualPrices, Capability::Predictions])
    }

    /// Create a dynamic mock that only advertises `capabilities`, and its controller.
    #[must_use]
    pub fn with_capabilities(
        name: &'static str,
        capabilities: &[Capability],
    ) -> (Arc<dyn RecordSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self {
            name,
            prices: capabilities.contains(&Capability::ActualPrices),
            predictions: capabilities.contains(&Capability::Predictions),
            state,
        });
        (me as Arc<dyn RecordSource>, controller)
    }

    async fn resolve<T: Clone>(
        &self,
        capability: Capability,
        symbol: &str,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Result<T, AugurError> {
        // Snapshot the behavior without holding the lock across the hang.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push((capability, symbol.to_string()));
            pick(&*guard)
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(AugurError::not_found(format!("{capability} for {symbol}"))),
        }
    }
}

impl RecordSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        self.prices.then_some(self as &dyn PriceProvider)
    }

    fn as_prediction_provider(&self) -> Option<&dyn PredictionProvider> {
        self.predictions.then_some(self as &dyn PredictionProvider)
    }
}

#[async_trait]
impl PriceProvider for DynamicMockSource {
    async fn actual_prices(&self, symbol: &str) -> Result<Vec<ActualPriceRecord>, AugurError> {
        self.resolve(Capability::ActualPrices, symbol, |s| {
            s.price_rules.get(symbol).cloned()
        })
        .await
    }
}

#[async_trait]
impl PredictionProvider for DynamicMockSource {
    async fn predictions(&self, symbol: &str) -> Result<Vec<PredictionRecord>, AugurError> {
        self.resolve(Capability::Predictions, symbol, |s| {
            s.prediction_rules.get(symbol).cloned()
        })
        .await
    }
}
