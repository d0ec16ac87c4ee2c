use serde::{Deserialize, Serialize};

/// Why a signal could not be classified.
///
/// `Missing` and `NotANumber` render identically but are kept apart for
/// observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// An input indicator was never computed (insufficient history).
    Missing,
    /// An input indicator exists but is not a number.
    NotANumber,
}

/// Latest values of the four indicator columns.
///
/// Each field is `None` until enough history exists for its window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ma_short: Option<f64>,
    pub ma_medium: Option<f64>,
    pub ma_long: Option<f64>,
    pub rsi: Option<f64>,
}

/// Trend signal derived from the moving-average ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendSignal {
    Buy,
    Sell,
    Hold,
    Unavailable(UnavailableReason),
}

impl TrendSignal {
    /// Display label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            TrendSignal::Buy => "BUY",
            TrendSignal::Sell => "SELL",
            TrendSignal::Hold => "HOLD",
            TrendSignal::Unavailable(UnavailableReason::Missing) => "MA MISSING",
            TrendSignal::Unavailable(UnavailableReason::NotANumber) => "MA NAN",
        }
    }
}

/// Momentum status derived from the RSI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumStatus {
    Overbought,
    Oversold,
    Bullish,
    Bearish,
    Neutral,
    Unavailable(UnavailableReason),
}

impl MomentumStatus {
    /// Display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            MomentumStatus::Overbought => "OB",
            MomentumStatus::Oversold => "OS",
            MomentumStatus::Bullish => "Bull",
            MomentumStatus::Bearish => "Bear",
            MomentumStatus::Neutral => "Neut",
            MomentumStatus::Unavailable(UnavailableReason::Missing) => "RSI MISSING",
            MomentumStatus::Unavailable(UnavailableReason::NotANumber) => "RSI NAN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_labels() {
        assert_eq!(TrendSignal::Buy.label(), "BUY");
        assert_eq!(TrendSignal::Sell.label(), "SELL");
        assert_eq!(TrendSignal::Hold.label(), "HOLD");
        assert_eq!(
            TrendSignal::Unavailable(UnavailableReason::Missing).label(),
            "MA MISSING"
        );
    }

    #[test]
    fn test_momentum_labels() {
        assert_eq!(MomentumStatus::Overbought.label(), "OB");
        assert_eq!(MomentumStatus::Neutral.label(), "Neut");
        assert_eq!(
            MomentumStatus::Unavailable(UnavailableReason::NotANumber).label(),
            "RSI NAN"
        );
    }

    #[test]
    fn test_signal_serde_round_trip() {
        let json = serde_json::to_string(&TrendSignal::Buy).unwrap();
        assert_eq!(json, "\"buy\"");
        let back: TrendSignal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TrendSignal::Buy);
    }
}
