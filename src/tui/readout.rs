//! Builds and renders the centered monitor readout.
//!
//! `build_view` is the presentation formatter: a pure mapping from a cycle
//! outcome to text plus style hints. Rendering proper stays in `render`.

use chrono::DateTime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Theme;
use crate::error::MonitorError;
use crate::types::{
    CycleOutcome, MomentumStatus, ReadoutLine, ReadoutSpan, ReadoutView, Snapshot, StyleHint,
    TradeDirection, TrendSignal,
};

/// Map a cycle outcome to the renderable view model.
pub fn build_view(outcome: &CycleOutcome) -> ReadoutView {
    let mut lines = Vec::with_capacity(4);

    lines.push(ReadoutLine::from_spans(vec![ReadoutSpan::new(
        outcome.observed.format("%H:%M:%S").to_string(),
        StyleHint::Muted,
    )]));

    match &outcome.result {
        Ok(snapshot) => {
            lines.push(price_line(&outcome.ticker, snapshot));
            lines.push(trend_line(snapshot.trend));
            lines.push(momentum_line(snapshot));
        }
        Err(error) => {
            lines.push(ReadoutLine::from_spans(vec![ReadoutSpan::strong(
                outcome.ticker.clone(),
                StyleHint::Strong,
            )]));
            lines.push(ReadoutLine::from_spans(vec![ReadoutSpan::new(
                format!("Data Error: {}", error.render_label()),
                StyleHint::Warning,
            )]));
            let tag = error_tag(error);
            lines.push(ReadoutLine::from_spans(vec![ReadoutSpan::new(
                format!("MA: {}", tag),
                StyleHint::Warning,
            )]));
            lines.push(ReadoutLine::from_spans(vec![ReadoutSpan::new(
                format!("RSI: {}", tag),
                StyleHint::Warning,
            )]));
        }
    }

    ReadoutView { lines }
}

/// Placeholder view shown before the first cycle completes.
pub fn init_view(ticker: &str) -> ReadoutView {
    ReadoutView {
        lines: vec![
            ReadoutLine::from_spans(vec![ReadoutSpan::strong(
                ticker.to_string(),
                StyleHint::Strong,
            )]),
            ReadoutLine::from_spans(vec![ReadoutSpan::new("MA: INIT", StyleHint::Warning)]),
            ReadoutLine::from_spans(vec![ReadoutSpan::new("RSI: INIT", StyleHint::Warning)]),
        ],
    }
}

fn price_line(ticker: &str, snapshot: &Snapshot) -> ReadoutLine {
    let price_hint = match snapshot.direction {
        Some(TradeDirection::Up) => StyleHint::Buy,
        Some(TradeDirection::Down) => StyleHint::Sell,
        None => StyleHint::Default,
    };

    let mut spans = vec![
        ReadoutSpan::strong(ticker.to_string(), StyleHint::Strong),
        ReadoutSpan::new(format!("  P: {:.2}", snapshot.close), price_hint),
    ];

    if let Some(direction) = snapshot.direction {
        spans.push(ReadoutSpan::new(
            format!(" {}", direction.arrow()),
            price_hint,
        ));
    }

    let (short, medium, long) = (
        snapshot.indicators.ma_short.unwrap_or(f64::NAN),
        snapshot.indicators.ma_medium.unwrap_or(f64::NAN),
        snapshot.indicators.ma_long.unwrap_or(f64::NAN),
    );
    spans.push(ReadoutSpan::new(
        format!(
            "  @{} | MA: {:.2}/{:.2}/{:.2}",
            candle_clock(snapshot.candle_time),
            short,
            medium,
            long
        ),
        StyleHint::Muted,
    ));

    ReadoutLine::from_spans(spans)
}

fn trend_line(trend: TrendSignal) -> ReadoutLine {
    let span = match trend {
        TrendSignal::Buy => ReadoutSpan::strong("MA: >> BUY <<", StyleHint::Buy),
        TrendSignal::Sell => ReadoutSpan::strong("MA: << SELL >>", StyleHint::Sell),
        TrendSignal::Hold => ReadoutSpan::new("MA: HOLD", StyleHint::Default),
        TrendSignal::Unavailable(_) => {
            ReadoutSpan::new(format!("MA: {}", trend.label()), StyleHint::Warning)
        }
    };
    ReadoutLine::from_spans(vec![span])
}

fn momentum_line(snapshot: &Snapshot) -> ReadoutLine {
    let span = match (snapshot.momentum, snapshot.rsi_value) {
        (status @ (MomentumStatus::Overbought | MomentumStatus::Oversold), Some(value)) => {
            ReadoutSpan::strong(
                format!("RSI({:.2}) {}", value, status.label()),
                StyleHint::Extreme,
            )
        }
        (MomentumStatus::Bullish, Some(value)) => {
            ReadoutSpan::new(format!("RSI({:.2}) Bull", value), StyleHint::Bullish)
        }
        (MomentumStatus::Bearish, Some(value)) => {
            ReadoutSpan::new(format!("RSI({:.2}) Bear", value), StyleHint::Bearish)
        }
        (MomentumStatus::Neutral, Some(value)) => {
            ReadoutSpan::new(format!("RSI({:.2}) Neut", value), StyleHint::Default)
        }
        (status, _) => {
            ReadoutSpan::new(format!("RSI: {}", status.label()), StyleHint::Warning)
        }
    };
    ReadoutLine::from_spans(vec![span])
}

/// Bar timestamp as HH:MM:SS, timezone naive.
fn candle_clock(time: i64) -> String {
    DateTime::from_timestamp(time, 0)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Fetch-level failures collapse to one tag, the way compute statuses keep
/// their own labels.
fn error_tag(error: &MonitorError) -> String {
    match error {
        MonitorError::InsufficientHistory { .. }
        | MonitorError::NoUsableData
        | MonitorError::NotANumber => error.render_label(),
        _ => "DATA_ERR".to_string(),
    }
}

/// Render the view centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, view: &ReadoutView, theme: &Theme) {
    let height = view.lines.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let lines: Vec<Line> = view
        .lines
        .iter()
        .map(|line| {
            Line::from(
                line.spans
                    .iter()
                    .map(|span| {
                        Span::styled(span.text.clone(), theme.style(span.hint, span.emphasis))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[1]);
}
