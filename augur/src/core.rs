use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use augur_core::{
    AugurConfig, AugurError, QualityThresholds, RangePreset, RecordSource, VisibleLevels,
};
use chrono_tz::Tz;

/// Orchestrator that fetches both record feeds from registered sources and
/// reconciles them into charts.
pub struct Augur {
    pub(crate) sources: Vec<Arc<dyn RecordSource>>,
    pub(crate) cfg: AugurConfig,
}

/// Builder for constructing an `Augur` orchestrator with custom configuration.
pub struct AugurBuilder {
    sources: Vec<Arc<dyn RecordSource>>,
    cfg: AugurConfig,
}

impl Default for AugurBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AugurBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no sources; register at least one via [`Self::with_source`].
    /// Defaults: New York market timezone, three-month range, all known band
    /// levels visible, 0.8/0.6 quality thresholds, 5s per-source timeout and no
    /// overall deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: AugurConfig::default(),
        }
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn with_config(mut self, cfg: AugurConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Register a record source.
    ///
    /// Registration order is the fallback order unless [`Self::prefer_symbol`]
    /// overrides it. A source may serve one feed or both.
    #[must_use]
    pub fn with_source(mut self, s: Arc<dyn RecordSource>) -> Self {
        self.sources.push(s);
        self
    }

    /// Set preferred sources for a symbol using source instances.
    ///
    /// The list is an ordering hint; unlisted but capable sources are still
    /// tried after the listed ones.
    #[must_use]
    pub fn prefer_symbol(mut self, symbol: &str, sources_desc: &[Arc<dyn RecordSource>]) -> Self {
        let names = sources_desc.iter().map(|s| s.name().to_string()).collect();
        self.cfg.symbol_priority.insert(symbol.to_string(), names);
        self
    }

    /// Market timezone used to derive today's reference day.
    #[must_use]
    pub const fn timezone(mut self, tz: Tz) -> Self {
        self.cfg.timezone = tz;
        self
    }

    /// Range applied when a query names none.
    #[must_use]
    pub const fn default_range(mut self, preset: RangePreset) -> Self {
        self.cfg.default_range = preset;
        self
    }

    /// Band levels shown when a query names none.
    #[must_use]
    pub fn visible_levels(mut self, levels: VisibleLevels) -> Self {
        self.cfg.visible_levels = levels;
        self
    }

    /// Quality tier thresholds.
    #[must_use]
    pub const fn quality_thresholds(mut self, thresholds: QualityThresholds) -> Self {
        self.cfg.quality = thresholds;
        self
    }

    /// Timeout applied to every individual source call.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Overall deadline for fetching both feeds of one chart.
    ///
    /// When exceeded, `chart` returns a `RequestTimeout` error.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Augur` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no sources have been registered, or if the
    /// quality thresholds are not ordered (`medium > high`).
    pub fn build(mut self) -> Result<Augur, AugurError> {
        if self.sources.is_empty() {
            return Err(AugurError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }
        if self.cfg.quality.medium > self.cfg.quality.high {
            return Err(AugurError::InvalidArg(format!(
                "quality thresholds out of order: medium {} > high {}",
                self.cfg.quality.medium, self.cfg.quality.high
            )));
        }

        // Drop unknown names from priority lists and dedup.
        let known: std::collections::HashSet<&'static str> =
            self.sources.iter().map(|s| s.name()).collect();
        for names in self.cfg.symbol_priority.values_mut() {
            let mut seen = std::collections::HashSet::new();
            names.retain(|n| known.contains(n.as_str()) && seen.insert(n.clone()));
        }

        Ok(Augur {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

/// Attach the source name to an error that does not already identify its origin.
pub fn tag_err(source: &str, e: AugurError) -> AugurError {
    match e {
        e @ (AugurError::NotFound { .. }
        | AugurError::SourceTimeout { .. }
        | AugurError::Source { .. }
        | AugurError::RequestTimeout { .. }
        | AugurError::Unsupported { .. }
        | AugurError::AllSourcesFailed(_)) => e,
        other => AugurError::Source {
            source_name: source.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Augur {
    /// Start building a new `Augur` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use augur::{Augur, RangePreset};
    ///
    /// let primary = Arc::new(MyWarehouseSource::new());
    /// let backup = Arc::new(MyBackupSource::new());
    ///
    /// let augur = Augur::builder()
    ///     .with_source(primary)
    ///     .with_source(backup)
    ///     .default_range(RangePreset::SixMonths)
    ///     .source_timeout(std::time::Duration::from_secs(2))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> AugurBuilder {
        AugurBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &AugurConfig {
        &self.cfg
    }

    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::core::source_call_with_timeout",
            skip(fut),
            fields(
                source = source_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, AugurError>
    where
        Fut: core::future::Future<Output = Result<T, AugurError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(AugurError::source_timeout(source_name, capability)))
    }

    /// Sources in fallback order for `symbol`.
    pub(crate) fn ordered(&self, symbol: &str) -> Vec<Arc<dyn RecordSource>> {
        let mut out: Vec<(usize, Arc<dyn RecordSource>)> =
            self.sources.iter().cloned().enumerate().collect();
        if let Some(pref) = self.cfg.symbol_priority.get(symbol) {
            let pos: HashMap<&str, usize> = pref
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), i))
                .collect();
            out.sort_by_key(|(orig_i, s)| {
                (pos.get(s.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
        }
        out.into_iter().map(|(_, s)| s).collect()
    }
}

/// Apply an optional overall deadline to `fut`.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    capability: &'static str,
    fut: Fut,
) -> Result<T, AugurError>
where
    Fut: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| AugurError::request_timeout(capability)),
        None => Ok(fut.await),
    }
}
