//! Vigil - terminal stock monitor with moving-average and RSI trading signals.

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod tui;
pub mod types;

pub use config::Config;
pub use error::{MonitorError, Result};
pub use types::*;
