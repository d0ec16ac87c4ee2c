use serde::{Deserialize, Serialize};

/// Direction of the latest close relative to the previous cycle's close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Up,
    Down,
}

impl TradeDirection {
    /// Compare two closes; equal or non-finite closes carry no direction.
    pub fn from_closes(previous: f64, current: f64) -> Option<Self> {
        if !previous.is_finite() || !current.is_finite() {
            return None;
        }
        if current > previous {
            Some(TradeDirection::Up)
        } else if current < previous {
            Some(TradeDirection::Down)
        } else {
            None
        }
    }

    /// Glyph for the readout.
    pub fn arrow(&self) -> &'static str {
        match self {
            TradeDirection::Up => "▲",
            TradeDirection::Down => "▼",
        }
    }
}

/// A single observed closing price.
///
/// `time` is Unix seconds for the bar, timezone naive. Series are ordered
/// oldest-to-newest with unique timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: i64,
    pub close: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_up_down() {
        assert_eq!(
            TradeDirection::from_closes(100.0, 101.0),
            Some(TradeDirection::Up)
        );
        assert_eq!(
            TradeDirection::from_closes(101.0, 100.0),
            Some(TradeDirection::Down)
        );
    }

    #[test]
    fn test_direction_flat_is_none() {
        assert_eq!(TradeDirection::from_closes(100.0, 100.0), None);
    }

    #[test]
    fn test_direction_requires_finite_closes() {
        assert_eq!(TradeDirection::from_closes(f64::NAN, 100.0), None);
        assert_eq!(TradeDirection::from_closes(100.0, f64::INFINITY), None);
    }
}
