//! Short-lived quote cache consulted before each upstream fetch.
//!
//! One record, one owner: the refresh loop. The TTL sits just under the
//! refresh interval so a forced cycle right after a fetch reuses it
//! instead of hitting the source twice in the same second.

use std::time::{Duration, Instant};

use crate::types::PricePoint;

#[derive(Debug, Clone)]
struct CachedQuote {
    symbol: String,
    series: Vec<PricePoint>,
    fetched_at: Instant,
}

/// Single-record TTL cache for the most recent fetch.
#[derive(Debug)]
pub struct QuoteCache {
    entry: Option<CachedQuote>,
    ttl: Duration,
}

impl QuoteCache {
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// The cached series for `symbol`, if still fresh at `now`.
    pub fn get(&mut self, symbol: &str, now: Instant) -> Option<Vec<PricePoint>> {
        let expired = match &self.entry {
            Some(entry) => now.duration_since(entry.fetched_at) >= self.ttl,
            None => return None,
        };
        if expired {
            self.entry = None;
            return None;
        }

        let entry = self.entry.as_ref()?;
        if entry.symbol != symbol {
            return None;
        }
        Some(entry.series.clone())
    }

    pub fn put(&mut self, symbol: &str, series: Vec<PricePoint>, now: Instant) {
        self.entry = Some(CachedQuote {
            symbol: symbol.to_string(),
            series,
            fetched_at: now,
        });
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
