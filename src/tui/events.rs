//! Input pump and tick source for the TUI loop.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Events the TUI loop reacts to.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Scheduler tick; fires when no input arrives within the tick rate.
    Tick,
    /// Terminal resize.
    Resize(u16, u16),
}

/// Merges blocking terminal input with a tokio tick interval.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    ticker: Interval,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // crossterm reads block, so they get their own thread; the channel
        // closing on the receiver side ends it.
        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CrosstermEvent::Key(key)) => {
                    if tx.send(Event::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CrosstermEvent::Resize(width, height)) => {
                    if tx.send(Event::Resize(width, height)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        let mut ticker = interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self { rx, ticker }
    }

    /// Next input event, or a tick when the interval elapses first.
    pub async fn next(&mut self) -> Event {
        tokio::select! {
            Some(event) = self.rx.recv() => event,
            _ = self.ticker.tick() => Event::Tick,
        }
    }
}

/// Check if a key event is Ctrl+C.
pub fn is_interrupt(event: &KeyEvent) -> bool {
    event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL
}
