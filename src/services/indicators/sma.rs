//! Simple moving average column.

/// Per-position simple moving average over `window` closes.
///
/// The value at position `i` is the mean of the `window` closes ending at
/// `i`; positions before the first full window are `None`.
pub fn rolling_mean(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if window == 0 || closes.len() < window {
        return out;
    }

    for i in (window - 1)..closes.len() {
        let sum: f64 = closes[i + 1 - window..=i].iter().sum();
        out[i] = Some(sum / window as f64);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warm_up_positions_are_undefined() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert!(out[2].is_some());
        assert!(out[3].is_some());
    }

    #[test]
    fn test_mean_of_trailing_window() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(out[2], Some(2.0));
        assert_eq!(out[3], Some(3.0));
    }

    #[test]
    fn test_window_one_is_identity() {
        let closes = [10.0, 20.0, 30.0];
        let out = rolling_mean(&closes, 1);
        assert_eq!(out, vec![Some(10.0), Some(20.0), Some(30.0)]);
    }

    #[test]
    fn test_series_shorter_than_window() {
        let out = rolling_mean(&[1.0, 2.0], 5);
        assert_eq!(out, vec![None, None]);
    }
}
