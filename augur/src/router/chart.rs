use std::sync::Arc;

use augur_core::{
    ActualPriceRecord, AugurError, Capability, ChartReport, ChartRequest, DataQualityWarning,
    PredictionRecord, RangeMode, RecordSource, VisibleLevels, compose, reference_date,
};
use chrono::{DateTime, NaiveDate, Utc};

use crate::Augur;
use crate::core::{tag_err, with_request_deadline};
use crate::router::util::collapse_errors;

/// Caller-side chart parameters. Unset fields fall back to the orchestrator's
/// configuration; an unset reference means today in the configured timezone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartQuery {
    /// Day separating graded predictions from forecasts.
    pub reference: Option<NaiveDate>,
    /// Window to apply.
    pub range: Option<RangeMode>,
    /// Band levels to emit.
    pub visible_levels: Option<VisibleLevels>,
}

impl ChartQuery {
    /// Query that uses every configured default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the reference day.
    #[must_use]
    pub const fn reference(mut self, day: NaiveDate) -> Self {
        self.reference = Some(day);
        self
    }

    /// Select the window (a `RangePreset` or any `RangeMode`).
    #[must_use]
    pub fn range(mut self, range: impl Into<RangeMode>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Select the visible band levels.
    #[must_use]
    pub fn visible_levels(mut self, levels: VisibleLevels) -> Self {
        self.visible_levels = Some(levels);
        self
    }
}

impl Augur {
    /// Resolve a query against the configuration, using `now` for an unset reference day.
    #[must_use]
    pub fn resolve(&self, query: &ChartQuery, now: DateTime<Utc>) -> ChartRequest {
        let reference = query
            .reference
            .unwrap_or_else(|| reference_date(now, self.cfg.timezone));
        ChartRequest::new(reference)
            .range(query.range.unwrap_or_else(|| self.cfg.default_range.into()))
            .visible_levels(
                query
                    .visible_levels
                    .clone()
                    .unwrap_or_else(|| self.cfg.visible_levels.clone()),
            )
            .quality(self.cfg.quality)
    }

    /// Fetch both feeds for `symbol` and reconcile them into a chart.
    ///
    /// Behavior and trade-offs:
    /// - Prices and predictions are fetched concurrently; each feed walks the
    ///   sources in priority order with the per-source timeout and stops at the
    ///   first non-empty answer.
    /// - If one feed fails entirely the chart still renders from the other and
    ///   carries a `MissingSource` warning.
    /// - Record-level defects never fail the call; they are returned as warnings.
    ///
    /// # Errors
    /// - `InvalidArg` for a blank symbol.
    /// - `RequestTimeout` when the configured overall deadline elapses.
    /// - `AllSourcesFailed` with both feed errors when neither feed could be fetched.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "augur::router::chart", skip_all, fields(symbol = %symbol))
    )]
    pub async fn chart(&self, symbol: &str, query: &ChartQuery) -> Result<ChartReport, AugurError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(AugurError::InvalidArg("symbol must not be empty".to_string()));
        }
        let request = self.resolve(query, Utc::now());

        let (prices, predictions) = with_request_deadline(
            self.cfg.request_timeout,
            "chart",
            futures::future::join(self.actual_prices(symbol), self.predictions(symbol)),
        )
        .await?;

        let (actuals, predictions, missing) = match (prices, predictions) {
            (Err(a), Err(p)) => return Err(AugurError::AllSourcesFailed(vec![a, p])),
            (Ok(a), Ok(p)) => (a, p, None),
            (Err(e), Ok(p)) => (vec![], p, Some((Capability::ActualPrices, e))),
            (Ok(a), Err(e)) => (a, vec![], Some((Capability::Predictions, e))),
        };

        let mut report = compose(symbol, &request, &actuals, &predictions);
        if let Some((origin, error)) = missing {
            #[cfg(feature = "tracing")]
            tracing::warn!(%origin, error = %error, "rendering chart without feed");
            report
                .warnings
                .insert(0, DataQualityWarning::MissingSource { origin, error });
        }
        Ok(report)
    }

    /// Build charts for several symbols concurrently.
    ///
    /// Returns `(charts, failures)`; one symbol failing does not fail the batch.
    pub async fn charts(
        &self,
        symbols: &[&str],
        query: &ChartQuery,
    ) -> (Vec<ChartReport>, Vec<(String, AugurError)>) {
        let tasks = symbols.iter().map(|s| async move { (*s, self.chart(s, query).await) });
        let results = futures::future::join_all(tasks).await;

        let mut ok = Vec::new();
        let mut failures = Vec::new();
        for (symbol, res) in results {
            match res {
                Ok(r) => ok.push(r),
                Err(e) => failures.push((symbol.to_string(), e)),
            }
        }
        (ok, failures)
    }

    /// Realized prices for `symbol` from the first source that has them.
    ///
    /// # Errors
    /// See [`Augur::chart`]; errors are per feed here, never aggregated across feeds.
    pub async fn actual_prices(&self, symbol: &str) -> Result<Vec<ActualPriceRecord>, AugurError> {
        self.fetch_feed(symbol, Capability::ActualPrices, |src, sym| {
            src.supports(Capability::ActualPrices).then(|| async move {
                match src.as_price_provider() {
                    Some(p) => p.actual_prices(&sym).await,
                    None => Err(AugurError::unsupported(Capability::ActualPrices.as_str())),
                }
            })
        })
        .await
    }

    /// Predictions for `symbol` from the first source that has them.
    ///
    /// # Errors
    /// See [`Augur::actual_prices`].
    pub async fn predictions(&self, symbol: &str) -> Result<Vec<PredictionRecord>, AugurError> {
        self.fetch_feed(symbol, Capability::Predictions, |src, sym| {
            src.supports(Capability::Predictions).then(|| async move {
                match src.as_prediction_provider() {
                    Some(p) => p.predictions(&sym).await,
                    None => Err(AugurError::unsupported(Capability::Predictions.as_str())),
                }
            })
        })
        .await
    }

    /// Priority walk with fallback for one feed.
    ///
    /// An empty answer falls through to the next source; if every answering
    /// source was empty, the empty answer is returned.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::router::fetch_feed",
            skip_all,
            fields(symbol = %symbol, capability = %capability),
        )
    )]
    async fn fetch_feed<T, F, Fut>(
        &self,
        symbol: &str,
        capability: Capability,
        call: F,
    ) -> Result<Vec<T>, AugurError>
    where
        T: Send,
        F: Fn(Arc<dyn RecordSource>, String) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<Vec<T>, AugurError>> + Send,
    {
        let mut attempted_any = false;
        let mut empty: Option<Vec<T>> = None;
        let mut errors: Vec<AugurError> = Vec::new();

        for src in self.ordered(symbol) {
            let name = src.name();
            let Some(fut) = call(Arc::clone(&src), symbol.to_string()) else {
                continue;
            };
            attempted_any = true;
            match Self::source_call_with_timeout(
                name,
                capability.as_str(),
                self.cfg.source_timeout,
                fut,
            )
            .await
            {
                Ok(rows) if !rows.is_empty() => return Ok(rows),
                Ok(rows) => {
                    empty.get_or_insert(rows);
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(source = name, error = %e, "source failed; falling back");
                    errors.push(tag_err(name, e));
                }
            }
        }

        if let Some(rows) = empty {
            return Ok(rows);
        }
        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            format!("{capability} for {symbol}"),
        ))
    }
}
