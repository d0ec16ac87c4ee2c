use chrono::{DateTime, Local};

use crate::error::MonitorError;
use crate::types::{IndicatorSet, MomentumStatus, TradeDirection, TrendSignal};

/// The classified state of the instrument at the latest usable bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Latest close from the aligned indicator frame.
    pub close: f64,
    /// Bar timestamp of that close, Unix seconds.
    pub candle_time: i64,
    pub indicators: IndicatorSet,
    pub trend: TrendSignal,
    pub momentum: MomentumStatus,
    pub rsi_value: Option<f64>,
    /// Close vs. the previous cycle's close; `None` after a ticker change.
    pub direction: Option<TradeDirection>,
}

/// Everything one completed cycle produced.
#[derive(Debug)]
pub struct CycleOutcome {
    pub ticker: String,
    /// Wall-clock time the cycle published.
    pub observed: DateTime<Local>,
    /// Cycle counter after this cycle completed.
    pub cycle: u64,
    pub result: Result<Snapshot, MonitorError>,
}

/// Style vocabulary the theme resolves to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleHint {
    Default,
    /// Prominent text such as the ticker symbol.
    Strong,
    Muted,
    Warning,
    Buy,
    Sell,
    Bullish,
    Bearish,
    /// Overbought/oversold extremes.
    Extreme,
}

/// One styled fragment of a readout line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutSpan {
    pub text: String,
    pub hint: StyleHint,
    pub emphasis: bool,
}

impl ReadoutSpan {
    pub fn new(text: impl Into<String>, hint: StyleHint) -> Self {
        Self {
            text: text.into(),
            hint,
            emphasis: false,
        }
    }

    pub fn strong(text: impl Into<String>, hint: StyleHint) -> Self {
        Self {
            text: text.into(),
            hint,
            emphasis: true,
        }
    }
}

/// One line of the readout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadoutLine {
    pub spans: Vec<ReadoutSpan>,
}

impl ReadoutLine {
    pub fn from_spans(spans: Vec<ReadoutSpan>) -> Self {
        Self { spans }
    }

    /// Concatenated text content, ignoring styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// The renderable view model for one cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadoutView {
    pub lines: Vec<ReadoutLine>,
}
