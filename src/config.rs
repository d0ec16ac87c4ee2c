use std::env;
use std::time::Duration;

use crate::error::{MonitorError, Result};

pub const DEFAULT_TICKER: &str = "AAPL";
pub const DEFAULT_MA_SHORT: usize = 5;
pub const DEFAULT_MA_MEDIUM: usize = 8;
pub const DEFAULT_MA_LONG: usize = 13;
pub const DEFAULT_RSI_PERIOD: usize = 14;
pub const DEFAULT_RSI_OVERBOUGHT: f64 = 70.0;
pub const DEFAULT_RSI_OVERSOLD: f64 = 30.0;
pub const DEFAULT_RSI_MIDPOINT: f64 = 50.0;
pub const DEFAULT_REFRESH_MS: u64 = 1_000;
pub const DEFAULT_CACHE_TTL_MS: u64 = 900;
pub const DEFAULT_RANGE: &str = "1d";
pub const DEFAULT_INTERVAL: &str = "1m";
pub const DEFAULT_RETENTION: usize = 150;
pub const DEFAULT_ACCESS_CODE: &str = "vigil";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Access-code settings for the gate.
#[derive(Debug, Clone, Default)]
pub struct AccessConfig {
    /// Plaintext shared code; hashed once at startup.
    pub code: Option<String>,
    /// Hex-encoded SHA-256 digest of the shared code. Wins over `code`.
    pub code_sha256: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default ticker symbol shown at startup.
    pub ticker: String,
    /// Short moving-average window, in bars.
    pub ma_short: usize,
    /// Medium moving-average window, in bars.
    pub ma_medium: usize,
    /// Long moving-average window, in bars.
    pub ma_long: usize,
    /// RSI smoothing window, in bars.
    pub rsi_period: usize,
    /// RSI value above which momentum reads overbought.
    pub rsi_overbought: f64,
    /// RSI value below which momentum reads oversold.
    pub rsi_oversold: f64,
    /// RSI value separating bullish from bearish.
    pub rsi_midpoint: f64,
    /// Minimum time between full refresh cycles.
    pub refresh_interval: Duration,
    /// Quote cache lifetime; kept just under the refresh interval.
    pub cache_ttl: Duration,
    /// Upstream history range (e.g. "1d").
    pub range: String,
    /// Upstream bar interval (e.g. "1m").
    pub interval: String,
    /// Most recent observations kept per fetch.
    pub retention: usize,
    /// Access-code settings.
    pub access: AccessConfig,
    /// Directory for the log file.
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            ma_short: DEFAULT_MA_SHORT,
            ma_medium: DEFAULT_MA_MEDIUM,
            ma_long: DEFAULT_MA_LONG,
            rsi_period: DEFAULT_RSI_PERIOD,
            rsi_overbought: DEFAULT_RSI_OVERBOUGHT,
            rsi_oversold: DEFAULT_RSI_OVERSOLD,
            rsi_midpoint: DEFAULT_RSI_MIDPOINT,
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_MS),
            cache_ttl: Duration::from_millis(DEFAULT_CACHE_TTL_MS),
            range: DEFAULT_RANGE.to_string(),
            interval: DEFAULT_INTERVAL.to_string(),
            retention: DEFAULT_RETENTION,
            access: AccessConfig::default(),
            log_dir: DEFAULT_LOG_DIR.to_string(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            ticker: env::var("VIGIL_TICKER")
                .map(|t| t.trim().to_uppercase())
                .unwrap_or_else(|_| DEFAULT_TICKER.to_string()),
            ma_short: env_parse("VIGIL_MA_SHORT", DEFAULT_MA_SHORT),
            ma_medium: env_parse("VIGIL_MA_MEDIUM", DEFAULT_MA_MEDIUM),
            ma_long: env_parse("VIGIL_MA_LONG", DEFAULT_MA_LONG),
            rsi_period: env_parse("VIGIL_RSI_PERIOD", DEFAULT_RSI_PERIOD),
            rsi_overbought: env_parse("VIGIL_RSI_OVERBOUGHT", DEFAULT_RSI_OVERBOUGHT),
            rsi_oversold: env_parse("VIGIL_RSI_OVERSOLD", DEFAULT_RSI_OVERSOLD),
            rsi_midpoint: env_parse("VIGIL_RSI_MIDPOINT", DEFAULT_RSI_MIDPOINT),
            refresh_interval: Duration::from_millis(env_parse(
                "VIGIL_REFRESH_MS",
                DEFAULT_REFRESH_MS,
            )),
            cache_ttl: Duration::from_millis(env_parse(
                "VIGIL_CACHE_TTL_MS",
                DEFAULT_CACHE_TTL_MS,
            )),
            range: env::var("VIGIL_RANGE").unwrap_or_else(|_| DEFAULT_RANGE.to_string()),
            interval: env::var("VIGIL_INTERVAL").unwrap_or_else(|_| DEFAULT_INTERVAL.to_string()),
            retention: env_parse("VIGIL_RETENTION", DEFAULT_RETENTION),
            access: AccessConfig {
                code: env::var("VIGIL_ACCESS_CODE").ok(),
                code_sha256: env::var("VIGIL_ACCESS_CODE_SHA256").ok(),
            },
            log_dir: env::var("VIGIL_LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string()),
        }
    }

    /// Reject configurations the classifiers cannot interpret.
    ///
    /// The momentum bands assume oversold < midpoint < overbought and the
    /// trend rule assumes short < medium < long; violating configurations
    /// would misclassify silently, so they fail here instead.
    pub fn validate(&self) -> Result<()> {
        if self.ma_short < 1 || self.rsi_period < 1 {
            return Err(MonitorError::Config(
                "window lengths must be at least 1".to_string(),
            ));
        }
        if !(self.ma_short < self.ma_medium && self.ma_medium < self.ma_long) {
            return Err(MonitorError::Config(format!(
                "moving-average windows must be strictly increasing (got {}/{}/{})",
                self.ma_short, self.ma_medium, self.ma_long
            )));
        }
        if !(self.rsi_oversold < self.rsi_midpoint && self.rsi_midpoint < self.rsi_overbought) {
            return Err(MonitorError::Config(format!(
                "RSI thresholds must satisfy oversold < midpoint < overbought (got {}/{}/{})",
                self.rsi_oversold, self.rsi_midpoint, self.rsi_overbought
            )));
        }
        if self.retention == 0 {
            return Err(MonitorError::Config("retention must be positive".to_string()));
        }
        Ok(())
    }

    /// Minimum clean points the indicator engine needs.
    pub fn min_required(&self) -> usize {
        self.ma_short
            .max(self.ma_medium)
            .max(self.ma_long)
            .max(self.rsi_period)
            + 5
    }

    /// History range actually requested upstream.
    ///
    /// Intraday bar intervals only serve a few days of history, so they
    /// widen the request to five days.
    pub fn effective_range(&self) -> &str {
        match self.interval.as_str() {
            "1m" | "2m" | "5m" | "15m" | "30m" | "60m" | "90m" => "5d",
            _ => &self.range,
        }
    }
}
