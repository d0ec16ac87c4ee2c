//! Yahoo Finance chart API client.
//!
//! Serves intraday and daily closing prices for stocks and ETFs over the
//! unofficial chart endpoint (no API key).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::QuoteSource;
use crate::error::{MonitorError, Result};
use crate::types::PricePoint;

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

/// Yahoo uses hyphens for share classes (BRK-B, not BRK.B).
fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase().replace('.', "-")
}

/// Flatten the nested chart payload into ordered price points.
///
/// Bars with a null or non-positive close are skipped; Yahoo emits them
/// for halted or not-yet-settled minutes.
fn parse_points(payload: ChartResponse, symbol: &str) -> Result<Vec<PricePoint>> {
    if let Some(error) = payload.chart.error {
        return Err(MonitorError::DataUnavailable(format!(
            "{}: {}",
            error.code, error.description
        )));
    }

    let result = payload
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| MonitorError::DataUnavailable(format!("no result for {}", symbol)))?;

    let timestamps = result
        .timestamp
        .ok_or_else(|| MonitorError::DataUnavailable("missing timestamps".to_string()))?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| MonitorError::DataUnavailable("missing quote data".to_string()))?;

    let closes = quote
        .close
        .ok_or_else(|| MonitorError::DataUnavailable("missing close column".to_string()))?;

    let mut points = Vec::with_capacity(timestamps.len());
    for (i, &time) in timestamps.iter().enumerate() {
        let close = match closes.get(i).copied().flatten() {
            Some(c) => c,
            None => continue,
        };
        if close <= 0.0 {
            continue;
        }
        points.push(PricePoint { time, close });
    }

    Ok(points)
}

/// Yahoo Finance API client.
pub struct YahooQuoteClient {
    client: Client,
}

impl YahooQuoteClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for YahooQuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for YahooQuoteClient {
    async fn fetch(&self, symbol: &str, range: &str, interval: &str) -> Result<Vec<PricePoint>> {
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval={}&includePrePost=false",
            normalize_symbol(symbol),
            range,
            interval
        );

        debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MonitorError::TransportFault(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MonitorError::TransportFault(format!(
                "status {}",
                response.status()
            )));
        }

        let payload: ChartResponse = response
            .json()
            .await
            .map_err(|e| MonitorError::TransportFault(format!("malformed response: {}", e)))?;

        parse_points(payload, symbol)
    }
}
