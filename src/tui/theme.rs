//! Palette for the monitor readout.

use ratatui::style::{Color, Modifier, Style};

use crate::types::StyleHint;

/// Color scheme, tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct Theme {
    pub buy: Color,
    pub sell: Color,
    pub warning: Color,
    pub bullish: Color,
    pub bearish: Color,
    pub extreme: Color,
    pub text: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            buy: Color::Rgb(0x32, 0xCD, 0x32),     // lime green
            sell: Color::Rgb(0xFF, 0x45, 0x00),    // orange red
            warning: Color::Rgb(0xFF, 0xD7, 0x00), // gold
            bullish: Color::Cyan,
            bearish: Color::Magenta,
            extreme: Color::Rgb(0xFF, 0xA5, 0x00), // orange
            text: Color::Rgb(0xFA, 0xFA, 0xFA),
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Resolve a view-model style hint to a concrete style.
    pub fn style(&self, hint: StyleHint, emphasis: bool) -> Style {
        let color = match hint {
            StyleHint::Default => self.text,
            StyleHint::Strong => self.text,
            StyleHint::Muted => self.muted,
            StyleHint::Warning => self.warning,
            StyleHint::Buy => self.buy,
            StyleHint::Sell => self.sell,
            StyleHint::Bullish => self.bullish,
            StyleHint::Bearish => self.bearish,
            StyleHint::Extreme => self.extreme,
        };
        let style = Style::default().fg(color);
        if emphasis || hint == StyleHint::Strong {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style for titles.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.bullish)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders.
    pub fn border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for muted chrome text.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for error chrome text.
    pub fn error(&self) -> Style {
        Style::default().fg(self.sell)
    }
}
