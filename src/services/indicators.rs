//! Indicator math over close-price slices. Every function returns columns
//! aligned with its input: a cell is `None` until the window behind it has
//! filled, `Some` afterwards.

pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const MA50_WINDOW: usize = 50;
pub const MA20_WINDOW: usize = 20;

/// Simple Moving Average over a `window` of values, computed with a
/// running sum so long series stay O(n).
pub fn sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }

    let mut sum = 0.0;
    for (i, &v) in values.iter().enumerate() {
        sum += v;
        if i >= window {
            sum -= values[i - window];
        }
        if i + 1 >= window {
            out[i] = Some(sum / window as f64);
        }
    }
    out
}

/// Exponential Moving Average, seeded on the first value. Early values are
/// hidden until `window` values have been seen.
pub fn ema(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if values.is_empty() || window == 0 {
        return out;
    }

    let alpha = 2.0 / (window as f64 + 1.0);
    let mut current = values[0];
    for (i, &v) in values.iter().enumerate() {
        current = alpha * v + (1.0 - alpha) * current;
        if i + 1 >= window {
            out[i] = Some(current);
        }
    }
    out
}

/// Relative Strength Index.
///
/// Momentum oscillator in the 0–100 range: below 30 reads as oversold,
/// above 70 as overbought. Gains and losses are smoothed with a
/// 1/period EMA after a plain-average seed over the first `period` changes.
pub fn rsi(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; prices.len()];
    if prices.len() < 2 || period == 0 {
        return out;
    }

    let changes: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let gains: Vec<f64> = changes.iter().map(|&c| c.max(0.0)).collect();
    let losses: Vec<f64> = changes.iter().map(|&c| (-c).max(0.0)).collect();

    let seed = period.min(changes.len());
    let mut avg_gain = gains[..seed].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..seed].iter().sum::<f64>() / period as f64;

    if period < prices.len() {
        out[period] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    let alpha = 1.0 / period as f64;
    for i in period..changes.len() {
        avg_gain = alpha * gains[i] + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * losses[i] + (1.0 - alpha) * avg_loss;
        out[i + 1] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    let rs = if avg_loss == 0.0 {
        100.0
    } else {
        avg_gain / avg_loss
    };
    100.0 - 100.0 / (1.0 + rs)
}

/// Moving Average Convergence Divergence.
///
/// Returns the MACD line (fast EMA minus slow EMA) and its signal line
/// (EMA of the MACD line). The signal line is smoothed only over rows
/// where the MACD line exists, then mapped back onto the original index.
pub fn macd(
    prices: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let len = prices.len();
    let fast_ema = ema(prices, fast);
    let slow_ema = ema(prices, slow);

    let mut line: Vec<Option<f64>> = vec![None; len];
    for i in 0..len {
        if let (Some(f), Some(s)) = (fast_ema[i], slow_ema[i]) {
            line[i] = Some(f - s);
        }
    }

    let line_values: Vec<f64> = line.iter().flatten().copied().collect();
    let smoothed = ema(&line_values, signal);

    let mut signal_line: Vec<Option<f64>> = vec![None; len];
    let mut j = 0;
    for i in 0..len {
        if line[i].is_some() {
            signal_line[i] = smoothed[j];
            j += 1;
        }
    }

    (line, signal_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_fills_after_window() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            sma(&values, 2),
            vec![None, Some(1.5), Some(2.5), Some(3.5)]
        );
    }

    #[test]
    fn test_sma_window_zero_is_all_none() {
        assert_eq!(sma(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn test_sma_window_larger_than_input() {
        assert_eq!(sma(&[1.0, 2.0], 5), vec![None, None]);
    }

    #[test]
    fn test_ema_tracks_constant_series() {
        let values = [10.0; 6];
        let out = ema(&values, 3);
        assert!(out[..2].iter().all(Option::is_none));
        for v in out[2..].iter().flatten() {
            assert!((v - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rsi_rising_series_is_overbought() {
        let prices: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let out = rsi(&prices, RSI_PERIOD);
        assert!(out[..RSI_PERIOD].iter().all(Option::is_none));
        let last = out.last().unwrap().unwrap();
        assert!(last > 90.0, "rising series should read overbought, got {last}");
    }

    #[test]
    fn test_rsi_falling_series_is_oversold() {
        let prices: Vec<f64> = (0..40).map(|i| 100.0 - i as f64).collect();
        let last = rsi(&prices, RSI_PERIOD).last().unwrap().unwrap();
        assert!(last < 10.0, "falling series should read oversold, got {last}");
    }

    #[test]
    fn test_rsi_too_short_input_is_all_none() {
        assert_eq!(rsi(&[100.0], RSI_PERIOD), vec![None]);
    }

    #[test]
    fn test_macd_lines_align_with_input() {
        let prices: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64) * 0.5).collect();
        let (line, signal) = macd(&prices, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
        assert_eq!(line.len(), prices.len());
        assert_eq!(signal.len(), prices.len());
        // MACD needs the slow window, the signal needs a few more rows on top
        assert!(line[MACD_SLOW - 1].is_some());
        assert!(line[MACD_SLOW - 2].is_none());
        assert!(signal.last().unwrap().is_some());
        // steady uptrend keeps the fast EMA above the slow one
        assert!(line.last().unwrap().unwrap() > 0.0);
    }

    #[test]
    fn test_macd_empty_input() {
        let (line, signal) = macd(&[], MACD_FAST, MACD_SLOW, MACD_SIGNAL);
        assert!(line.is_empty());
        assert!(signal.is_empty());
    }
}
