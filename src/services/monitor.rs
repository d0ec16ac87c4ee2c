//! The cycle runner: one fetch → compute → classify pass per due tick.

use std::time::Instant;

use chrono::Local;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{MonitorError, Result};
use crate::services::classify::{classify_momentum, classify_trend};
use crate::services::indicators::compute_indicators;
use crate::services::quote_cache::QuoteCache;
use crate::services::refresh::RefreshController;
use crate::sources::QuoteSource;
use crate::types::{CycleOutcome, PricePoint, Snapshot};

/// Drives the refresh loop over a quote source.
pub struct Monitor<S> {
    source: S,
    cache: QuoteCache,
    controller: RefreshController,
    config: Config,
}

impl<S: QuoteSource> Monitor<S> {
    pub fn new(source: S, config: Config) -> Self {
        let controller = RefreshController::new(&config.ticker, config.refresh_interval);
        let cache = QuoteCache::new(config.cache_ttl);
        Self {
            source,
            cache,
            controller,
            config,
        }
    }

    pub fn ticker(&self) -> &str {
        self.controller.ticker()
    }

    pub fn cycles(&self) -> u64 {
        self.controller.cycles()
    }

    /// Switch instruments; see [`RefreshController::set_ticker`].
    pub fn set_ticker(&mut self, raw: &str) -> bool {
        self.controller.set_ticker(raw)
    }

    /// Run one scheduler tick.
    ///
    /// Returns `None` when the staleness gate skips the cycle; fetch and
    /// compute failures still produce an outcome so the caller can render
    /// them.
    pub async fn tick(&mut self, now: Instant) -> Option<CycleOutcome> {
        if !self.controller.due(now) {
            return None;
        }
        Some(self.run_cycle(now).await)
    }

    async fn run_cycle(&mut self, now: Instant) -> CycleOutcome {
        let ticker = self.controller.ticker().to_string();

        let result = match self.load_series(&ticker, now).await {
            Ok(series) => self.snapshot(&series),
            Err(e) => {
                warn!("fetch failed for {}: {}", ticker, e);
                Err(e)
            }
        };

        if let Err(e) = &result {
            debug!("cycle for {} produced no snapshot: {}", ticker, e);
        }

        // A failed cycle still stamps the refresh instant so the next
        // attempt waits out the full interval.
        let close = result.as_ref().ok().map(|snapshot| snapshot.close);
        self.controller.complete(now, close);

        CycleOutcome {
            ticker,
            observed: Local::now(),
            cycle: self.controller.cycles(),
            result,
        }
    }

    async fn load_series(&mut self, ticker: &str, now: Instant) -> Result<Vec<PricePoint>> {
        if let Some(series) = self.cache.get(ticker, now) {
            debug!("quote cache hit for {}", ticker);
            return Ok(series);
        }

        let range = self.config.effective_range().to_string();
        let mut series = self
            .source
            .fetch(ticker, &range, &self.config.interval)
            .await?;

        if series.is_empty() {
            return Err(MonitorError::DataUnavailable(format!(
                "no points for {} ({}@{})",
                ticker, range, self.config.interval
            )));
        }

        if series.len() > self.config.retention {
            let excess = series.len() - self.config.retention;
            series.drain(..excess);
        }

        self.cache.put(ticker, series.clone(), now);
        Ok(series)
    }

    fn snapshot(&self, series: &[PricePoint]) -> Result<Snapshot> {
        let frame = compute_indicators(series, &self.config)?;
        let latest = *frame.latest().ok_or(MonitorError::NoUsableData)?;
        let indicators = latest.as_set();

        let trend = classify_trend(&indicators);
        let (momentum, rsi_value) = classify_momentum(&indicators, &self.config);
        let direction = self.controller.direction(latest.close);

        Ok(Snapshot {
            close: latest.close,
            candle_time: latest.time,
            indicators,
            trend,
            momentum,
            rsi_value,
            direction,
        })
    }
}
