//! Threshold and ordering rules mapping indicators to discrete signals.
//!
//! Both classifiers are pure, total functions: every input maps to exactly
//! one label.

use crate::config::Config;
use crate::types::{IndicatorSet, MomentumStatus, TrendSignal, UnavailableReason};

/// Classify the moving-average ordering into a trend signal.
///
/// Buy requires short > medium > long; Sell requires short < medium < long;
/// every other defined ordering is Hold.
pub fn classify_trend(latest: &IndicatorSet) -> TrendSignal {
    let (short, medium, long) = match (latest.ma_short, latest.ma_medium, latest.ma_long) {
        (Some(s), Some(m), Some(l)) => (s, m, l),
        _ => return TrendSignal::Unavailable(UnavailableReason::Missing),
    };

    if short.is_nan() || medium.is_nan() || long.is_nan() {
        return TrendSignal::Unavailable(UnavailableReason::NotANumber);
    }

    if short > medium && medium > long {
        TrendSignal::Buy
    } else if short < medium && medium < long {
        TrendSignal::Sell
    } else {
        TrendSignal::Hold
    }
}

/// Classify the RSI value against the configured thresholds.
///
/// Checked in strict priority order, first match wins; `Config::validate`
/// guarantees the bands cannot overlap. Values exactly on the outer
/// thresholds fall through to the midpoint comparison.
pub fn classify_momentum(latest: &IndicatorSet, config: &Config) -> (MomentumStatus, Option<f64>) {
    let value = match latest.rsi {
        Some(v) => v,
        None => {
            return (
                MomentumStatus::Unavailable(UnavailableReason::Missing),
                None,
            )
        }
    };

    if value.is_nan() {
        return (
            MomentumStatus::Unavailable(UnavailableReason::NotANumber),
            None,
        );
    }

    let status = if value > config.rsi_overbought {
        MomentumStatus::Overbought
    } else if value < config.rsi_oversold {
        MomentumStatus::Oversold
    } else if value > config.rsi_midpoint {
        MomentumStatus::Bullish
    } else if value < config.rsi_midpoint {
        MomentumStatus::Bearish
    } else {
        MomentumStatus::Neutral
    };

    (status, Some(value))
}
