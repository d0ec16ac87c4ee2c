/**
 * Monitor Cycle Tests
 *
 * Drives the full refresh loop against a deterministic quote source:
 * - Staleness gating between ticks
 * - Ticker changes and direction resets
 * - Failure handling without tight retry loops
 * - End-to-end trend classification
 */
use std::time::{Duration, Instant};

use vigil::config::Config;
use vigil::error::MonitorError;
use vigil::services::Monitor;
use vigil::types::{MomentumStatus, TradeDirection, TrendSignal};

mod common {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use vigil::error::{MonitorError, Result};
    use vigil::sources::QuoteSource;
    use vigil::types::PricePoint;

    /// Serves a rising close series, shifted upward on every fetch so
    /// consecutive cycles see a higher latest price.
    pub struct SteppingSource {
        pub bars: usize,
        pub step: f64,
        pub fail: bool,
        pub calls: Arc<AtomicUsize>,
    }

    impl SteppingSource {
        pub fn rising(bars: usize) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let source = Self {
                bars,
                step: 1.0,
                fail: false,
                calls: calls.clone(),
            };
            (source, calls)
        }

        pub fn failing() -> Self {
            Self {
                bars: 0,
                step: 0.0,
                fail: true,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl QuoteSource for SteppingSource {
        async fn fetch(&self, _: &str, _: &str, _: &str) -> Result<Vec<PricePoint>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(MonitorError::TransportFault(
                    "connection refused".to_string(),
                ));
            }
            let offset = call as f64 * self.step;
            Ok((0..self.bars)
                .map(|i| PricePoint {
                    time: 1_700_000_000 + i as i64 * 60,
                    close: 100.0 + i as f64 + offset,
                })
                .collect())
        }
    }
}

use common::SteppingSource;

#[tokio::test]
async fn test_rising_series_classifies_buy_end_to_end() {
    // 20 one-minute bars rising 100..119 against the default 5/8/13/14
    // windows: the short average leads the medium leads the long.
    let (source, _) = SteppingSource::rising(20);
    let mut monitor = Monitor::new(source, Config::default());

    let outcome = monitor.tick(Instant::now()).await.expect("first tick runs");
    let snapshot = outcome.result.as_ref().expect("snapshot");

    assert_eq!(snapshot.trend, TrendSignal::Buy);
    assert_eq!(snapshot.close, 119.0);
    // A monotonic rise has no losses, so momentum saturates overbought.
    assert_eq!(snapshot.momentum, MomentumStatus::Overbought);
    assert_eq!(snapshot.rsi_value, Some(100.0));
    // Nothing to compare against on the very first cycle.
    assert_eq!(snapshot.direction, None);

    let view = vigil::tui::build_view(&outcome);
    let texts: Vec<String> = view.lines.iter().map(|l| l.text()).collect();
    assert!(texts.iter().any(|t| t.contains(">> BUY <<")), "{:?}", texts);
}

#[tokio::test]
async fn test_staleness_gate_runs_only_the_first_of_two_close_ticks() {
    let (source, calls) = SteppingSource::rising(20);
    let mut monitor = Monitor::new(source, Config::default());
    let t0 = Instant::now();

    assert!(monitor.tick(t0).await.is_some());
    assert!(monitor.tick(t0 + Duration::from_millis(300)).await.is_none());

    assert_eq!(monitor.cycles(), 1);
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_ticker_change_forces_a_cycle_and_resets_direction() {
    let (source, _) = SteppingSource::rising(20);
    let mut monitor = Monitor::new(source, Config::default());
    let t0 = Instant::now();

    let first = monitor.tick(t0).await.unwrap().result.unwrap();
    assert_eq!(first.direction, None);

    // One interval later the source serves higher closes.
    let second = monitor
        .tick(t0 + Duration::from_secs(1))
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(second.direction, Some(TradeDirection::Up));

    // Switching instruments forces the next tick and suppresses any
    // direction derived from the old instrument's price.
    assert!(monitor.set_ticker(" msft "));
    assert_eq!(monitor.ticker(), "MSFT");

    let third = monitor
        .tick(t0 + Duration::from_millis(1100))
        .await
        .expect("forced tick runs despite the interval")
        .result
        .unwrap();
    assert_eq!(third.direction, None);
}

#[tokio::test]
async fn test_failed_fetch_publishes_an_error_and_keeps_the_interval() {
    let mut monitor = Monitor::new(SteppingSource::failing(), Config::default());
    let t0 = Instant::now();

    let outcome = monitor.tick(t0).await.expect("cycle still completes");
    assert!(matches!(
        outcome.result,
        Err(MonitorError::TransportFault(_))
    ));
    assert_eq!(monitor.cycles(), 1);

    // The failure does not tighten the retry loop.
    assert!(monitor.tick(t0 + Duration::from_millis(200)).await.is_none());

    let view = vigil::tui::build_view(&monitor.tick(t0 + Duration::from_secs(1)).await.unwrap());
    let texts: Vec<String> = view.lines.iter().map(|l| l.text()).collect();
    assert!(
        texts.iter().any(|t| t.contains("FETCH ERR")),
        "{:?}",
        texts
    );
}

#[tokio::test]
async fn test_empty_series_is_reported_as_data_unavailable() {
    let (source, _) = SteppingSource::rising(0);
    let mut monitor = Monitor::new(source, Config::default());

    let outcome = monitor.tick(Instant::now()).await.unwrap();
    assert!(matches!(
        outcome.result,
        Err(MonitorError::DataUnavailable(_))
    ));
}

#[tokio::test]
async fn test_short_series_is_reported_as_insufficient_history() {
    let (source, _) = SteppingSource::rising(10);
    let mut monitor = Monitor::new(source, Config::default());

    let outcome = monitor.tick(Instant::now()).await.unwrap();
    match outcome.result {
        Err(MonitorError::InsufficientHistory {
            required,
            available,
        }) => {
            assert_eq!(required, 19);
            assert_eq!(available, 10);
        }
        other => panic!("expected InsufficientHistory, got {:?}", other),
    }
}
