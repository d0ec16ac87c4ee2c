//! Wilder relative strength index column.

/// Per-position Wilder RSI over `period`.
///
/// The first `period` deltas seed the average gain/loss; the value at a
/// position uses the smoothed averages up to that close. Positions before
/// the seed completes are `None`. A series with no losses saturates at 100.
pub fn wilder_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return out;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let mut avg_gain: f64 = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses[..period].iter().sum::<f64>() / period as f64;
    out[period] = Some(scale(avg_gain, avg_loss));

    // Delta j sits between closes j and j + 1.
    for j in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[j]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[j]) / period as f64;
        out[j + 1] = Some(scale(avg_gain, avg_loss));
    }

    out
}

fn scale(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
