pub mod price;
pub mod signals;
pub mod view;

pub use price::{PricePoint, TradeDirection};
pub use signals::{IndicatorSet, MomentumStatus, TrendSignal, UnavailableReason};
pub use view::{CycleOutcome, ReadoutLine, ReadoutSpan, ReadoutView, Snapshot, StyleHint};
