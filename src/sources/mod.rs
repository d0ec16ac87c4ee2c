//! Market data sources.

pub mod yahoo;

pub use yahoo::YahooQuoteClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::PricePoint;

/// A source of time-ordered closing prices for a symbol.
///
/// Results are oldest-to-newest. Empty or malformed upstream payloads are
/// reported as errors, never panics. The trait exists so the refresh loop
/// can be driven by a deterministic fake in tests.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self, symbol: &str, range: &str, interval: &str) -> Result<Vec<PricePoint>>;
}
