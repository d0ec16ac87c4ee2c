//! Main TUI application: locked gate screen and the monitor readout.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use super::{events, readout, Screen, Theme};
use crate::config::Config;
use crate::services::gate::{AccessGate, GateDecision};
use crate::services::monitor::Monitor;
use crate::sources::QuoteSource;
use crate::types::ReadoutView;

/// Main TUI application.
pub struct App<S> {
    screen: Screen,
    monitor: Monitor<S>,
    gate: AccessGate,
    config: Config,
    theme: Theme,
    /// Latest published readout; `None` until the first cycle.
    view: Option<ReadoutView>,
    /// Access-code entry buffer (locked screen).
    code_input: String,
    /// Set after a rejected code, cleared by the next attempt.
    denied: bool,
    /// Ticker entry buffer; `Some` while editing.
    ticker_input: Option<String>,
    should_quit: bool,
}

impl<S: QuoteSource> App<S> {
    pub fn new(monitor: Monitor<S>, gate: AccessGate, config: Config) -> Self {
        Self {
            screen: Screen::Locked,
            monitor,
            gate,
            config,
            theme: Theme::default(),
            view: None,
            code_input: String::new(),
            denied: false,
            ticker_input: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle an event.
    pub async fn on_event(&mut self, event: events::Event) {
        match event {
            events::Event::Key(key) => self.on_key(key),
            events::Event::Tick => self.on_tick().await,
            events::Event::Resize(_, _) => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if events::is_interrupt(&key) {
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::Locked => self.on_locked_key(key),
            Screen::Monitor => self.on_monitor_key(key),
        }
    }

    fn on_locked_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => match self.gate.verify(&self.code_input) {
                GateDecision::Granted => {
                    info!("access granted");
                    self.screen = Screen::Monitor;
                    self.denied = false;
                    self.code_input.clear();
                }
                GateDecision::Denied => {
                    self.denied = true;
                    self.code_input.clear();
                }
            },
            KeyCode::Backspace => {
                self.code_input.pop();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.code_input.push(c);
            }
            _ => {}
        }
    }

    fn on_monitor_key(&mut self, key: KeyEvent) {
        if self.ticker_input.is_some() {
            match key.code {
                KeyCode::Enter => {
                    if let Some(raw) = self.ticker_input.take() {
                        self.monitor.set_ticker(&raw);
                    }
                }
                KeyCode::Esc => {
                    self.ticker_input = None;
                }
                KeyCode::Backspace => {
                    if let Some(buffer) = self.ticker_input.as_mut() {
                        buffer.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(buffer) = self.ticker_input.as_mut() {
                        buffer.push(c);
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.ticker_input = Some(String::new()),
            _ => {}
        }
    }

    async fn on_tick(&mut self) {
        if self.screen != Screen::Monitor {
            return;
        }
        if let Some(outcome) = self.monitor.tick(Instant::now()).await {
            self.view = Some(readout::build_view(&outcome));
        }
    }

    /// Render the current screen.
    pub fn render(&self, frame: &mut Frame) {
        match self.screen {
            Screen::Locked => self.render_locked(frame),
            Screen::Monitor => self.render_monitor(frame),
        }
    }

    fn render_locked(&self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);

        let masked = "\u{2022}".repeat(self.code_input.chars().count());
        let status = if self.denied {
            Line::from(Span::styled("Access denied.", self.theme.error()))
        } else {
            Line::from("")
        };

        let lines = vec![
            Line::from(Span::styled("VIGIL STOCK MONITOR", self.theme.title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Access code: ", self.theme.muted()),
                Span::raw(masked),
            ]),
            status,
            Line::from(Span::styled(
                "Enter to submit | Esc to quit",
                self.theme.muted(),
            )),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[1]);
    }

    fn render_monitor(&self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(area);

        match &self.view {
            Some(view) => readout::render(frame, chunks[0], view, &self.theme),
            None => {
                let placeholder = readout::init_view(self.monitor.ticker());
                readout::render(frame, chunks[0], &placeholder, &self.theme);
            }
        }

        self.render_footer(frame, chunks[1]);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let params = format!(
            "MA {}/{}/{} | RSI {} ({:.0}/{:.0}) | Data {} | Refresh {}ms",
            self.config.ma_short,
            self.config.ma_medium,
            self.config.ma_long,
            self.config.rsi_period,
            self.config.rsi_oversold,
            self.config.rsi_overbought,
            self.config.interval,
            self.config.refresh_interval.as_millis(),
        );

        let controls = match &self.ticker_input {
            Some(buffer) => Line::from(Span::styled(
                format!("Ticker: {}\u{258f}", buffer),
                self.theme.style(crate::types::StyleHint::Warning, false),
            )),
            None => Line::from(Span::styled(
                "t change ticker | q or Ctrl+C quit",
                self.theme.muted(),
            )),
        };

        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(params, self.theme.muted())),
            controls,
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border()),
        );

        frame.render_widget(paragraph, area);
    }
}

/// Run the TUI application until the user quits.
pub async fn run_tui<S: QuoteSource>(
    monitor: Monitor<S>,
    gate: AccessGate,
    config: Config,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(monitor, gate, config);
    let mut event_handler = events::EventHandler::new(Duration::from_millis(100));

    loop {
        terminal.draw(|f| app.render(f))?;

        let event = event_handler.next().await;
        app.on_event(event).await;

        if app.should_quit() {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
