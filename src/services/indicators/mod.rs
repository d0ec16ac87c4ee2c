//! Indicator engine.
//!
//! Computes per-position SMA and RSI columns over a price series and
//! aligns them into rows where every column is defined. Pure functions of
//! (series, config): identical inputs produce bit-identical output.

pub mod rsi;
pub mod sma;

pub use rsi::wilder_rsi;
pub use sma::rolling_mean;

use crate::config::Config;
use crate::error::{MonitorError, Result};
use crate::types::{IndicatorSet, PricePoint};

/// One aligned indicator row; exists only where every column is defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRow {
    pub time: i64,
    pub close: f64,
    pub ma_short: f64,
    pub ma_medium: f64,
    pub ma_long: f64,
    pub rsi: f64,
}

impl IndicatorRow {
    /// View of this row as the classifier's input type.
    pub fn as_set(&self) -> IndicatorSet {
        IndicatorSet {
            ma_short: Some(self.ma_short),
            ma_medium: Some(self.ma_medium),
            ma_long: Some(self.ma_long),
            rsi: Some(self.rsi),
        }
    }
}

/// Aligned indicator rows for a price series, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    rows: Vec<IndicatorRow>,
}

impl IndicatorFrame {
    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    /// The most recent aligned row. Construction guarantees at least one.
    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }
}

/// Compute the aligned indicator columns for `series`.
///
/// Points with a non-finite close are discarded first. Too little clean
/// history or a fully undefined alignment are reported as statuses, not
/// faults; the caller retries on the next cycle.
pub fn compute_indicators(series: &[PricePoint], config: &Config) -> Result<IndicatorFrame> {
    let clean: Vec<PricePoint> = series
        .iter()
        .filter(|p| p.close.is_finite())
        .copied()
        .collect();

    let required = config.min_required();
    if clean.len() < required {
        return Err(MonitorError::InsufficientHistory {
            required,
            available: clean.len(),
        });
    }

    let closes: Vec<f64> = clean.iter().map(|p| p.close).collect();
    let ma_short = rolling_mean(&closes, config.ma_short);
    let ma_medium = rolling_mean(&closes, config.ma_medium);
    let ma_long = rolling_mean(&closes, config.ma_long);
    let rsi = wilder_rsi(&closes, config.rsi_period);

    let rows: Vec<IndicatorRow> = clean
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            match (ma_short[i], ma_medium[i], ma_long[i], rsi[i]) {
                (Some(s), Some(m), Some(l), Some(r)) => Some(IndicatorRow {
                    time: point.time,
                    close: point.close,
                    ma_short: s,
                    ma_medium: m,
                    ma_long: l,
                    rsi: r,
                }),
                _ => None,
            }
        })
        .collect();

    if rows.is_empty() {
        return Err(MonitorError::NoUsableData);
    }

    Ok(IndicatorFrame { rows })
}
