//! Refresh state and the staleness gate for the polling loop.
//!
//! The controller is the single owner of all mutable monitor state. Ticks
//! arrive faster than the refresh interval; `due` decides which of them
//! become full cycles.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::types::TradeDirection;

/// Normalize free-text ticker input.
pub fn normalize_ticker(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Owns the per-instrument refresh state and applies the staleness gate.
#[derive(Debug)]
pub struct RefreshController {
    ticker: String,
    interval: Duration,
    last_refresh: Option<Instant>,
    last_close: Option<f64>,
    cycles: u64,
    /// Set at INIT and on ticker change; the next tick runs unconditionally.
    force_next: bool,
}

impl RefreshController {
    pub fn new(ticker: &str, interval: Duration) -> Self {
        Self {
            ticker: normalize_ticker(ticker),
            interval,
            last_refresh: None,
            last_close: None,
            cycles: 0,
            force_next: true,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn last_close(&self) -> Option<f64> {
        self.last_close
    }

    /// Whether a tick at `now` should run a full cycle.
    pub fn due(&self, now: Instant) -> bool {
        if self.force_next {
            return true;
        }
        match self.last_refresh {
            None => true,
            Some(at) => now.duration_since(at) >= self.interval,
        }
    }

    /// Switch instruments. Returns false for empty input or no change.
    ///
    /// An actual change clears the remembered close so the next cycle
    /// cannot derive a direction against another instrument's price, and
    /// forces the next tick.
    pub fn set_ticker(&mut self, raw: &str) -> bool {
        let normalized = normalize_ticker(raw);
        if normalized.is_empty() || normalized == self.ticker {
            return false;
        }
        info!("switching ticker {} -> {}", self.ticker, normalized);
        self.ticker = normalized;
        self.last_close = None;
        self.force_next = true;
        true
    }

    /// Direction of `close` relative to the last completed cycle's close.
    pub fn direction(&self, close: f64) -> Option<TradeDirection> {
        TradeDirection::from_closes(self.last_close?, close)
    }

    /// Record a completed cycle.
    ///
    /// Failed cycles pass `None` for the close: the refresh instant still
    /// advances (bounding the retry rate) but the remembered close stays.
    pub fn complete(&mut self, now: Instant, close: Option<f64>) {
        self.last_refresh = Some(now);
        self.cycles += 1;
        self.force_next = false;
        if let Some(value) = close {
            self.last_close = Some(value);
        }
        debug!("cycle {} complete for {}", self.cycles, self.ticker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> RefreshController {
        RefreshController::new("AAPL", Duration::from_secs(1))
    }

    #[test]
    fn test_first_tick_is_always_due() {
        let ctrl = controller();
        assert!(ctrl.due(Instant::now()));
    }

    #[test]
    fn test_sub_interval_tick_is_skipped_after_a_cycle() {
        let mut ctrl = controller();
        let t0 = Instant::now();
        ctrl.complete(t0, Some(100.0));
        assert!(!ctrl.due(t0 + Duration::from_millis(500)));
        assert!(ctrl.due(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_ticker_input_is_normalized() {
        let mut ctrl = controller();
        assert!(ctrl.set_ticker("  msft \n"));
        assert_eq!(ctrl.ticker(), "MSFT");
    }

    #[test]
    fn test_same_or_empty_ticker_is_ignored() {
        let mut ctrl = controller();
        assert!(!ctrl.set_ticker("aapl"));
        assert!(!ctrl.set_ticker("   "));
        assert_eq!(ctrl.ticker(), "AAPL");
    }

    #[test]
    fn test_ticker_change_clears_the_remembered_close() {
        let mut ctrl = controller();
        let t0 = Instant::now();
        ctrl.complete(t0, Some(100.0));
        assert_eq!(ctrl.direction(101.0), Some(TradeDirection::Up));

        assert!(ctrl.set_ticker("MSFT"));
        assert_eq!(ctrl.direction(101.0), None);
    }

    #[test]
    fn test_ticker_change_forces_the_next_tick() {
        let mut ctrl = controller();
        let t0 = Instant::now();
        ctrl.complete(t0, Some(100.0));
        assert!(!ctrl.due(t0 + Duration::from_millis(10)));

        ctrl.set_ticker("MSFT");
        assert!(ctrl.due(t0 + Duration::from_millis(10)));
    }

    #[test]
    fn test_failed_cycle_keeps_the_close_but_advances_the_clock() {
        let mut ctrl = controller();
        let t0 = Instant::now();
        ctrl.complete(t0, Some(100.0));
        ctrl.complete(t0 + Duration::from_secs(1), None);
        assert_eq!(ctrl.last_close(), Some(100.0));
        assert_eq!(ctrl.cycles(), 2);
        assert!(!ctrl.due(t0 + Duration::from_millis(1500)));
    }

    #[test]
    fn test_direction_tracks_last_close() {
        let mut ctrl = controller();
        let t0 = Instant::now();
        assert_eq!(ctrl.direction(100.0), None);
        ctrl.complete(t0, Some(100.0));
        assert_eq!(ctrl.direction(99.0), Some(TradeDirection::Down));
        assert_eq!(ctrl.direction(100.0), None);
    }
}
