//! Core services: indicator engine, signal classifier, refresh loop.

pub mod classify;
pub mod gate;
pub mod indicators;
pub mod monitor;
pub mod quote_cache;
pub mod refresh;

pub use gate::{AccessGate, GateDecision};
pub use monitor::Monitor;
pub use quote_cache::QuoteCache;
pub use refresh::RefreshController;
