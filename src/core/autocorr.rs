//! Autocorrelation engine: lagged correlation plus the first-zero and
//! first-minimum scans that many catalog features build on.

use super::stats::mean;

/// Autocovariance at the given lag, normalized by n.
///
/// Deviations are taken from the full-series mean; the sum runs over the
/// `n - lag` overlapping pairs. A lag at or beyond the series length
/// contributes no pairs and yields 0.
pub fn autocov(series: &[f64], lag: usize) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    let m = mean(series);
    autocov_with_mean(series, lag, m)
}

fn autocov_with_mean(series: &[f64], lag: usize, m: f64) -> f64 {
    let n = series.len();
    if lag >= n {
        return 0.0;
    }
    let mut cov = 0.0;
    for i in 0..n - lag {
        cov += (series[i] - m) * (series[i + lag] - m);
    }
    cov / n as f64
}

/// Autocorrelation at the given lag: `autocov(lag) / autocov(0)`.
///
/// A zero-variance series yields 0/0 = NaN, which is propagated.
pub fn autocorr(series: &[f64], lag: usize) -> f64 {
    autocov(series, lag) / autocov(series, 0)
}

/// Autocorrelation function at lags `0..=max_lag`, indexed by lag.
pub fn acf(series: &[f64], max_lag: usize) -> Vec<f64> {
    if series.is_empty() {
        return vec![f64::NAN; max_lag + 1];
    }
    let m = mean(series);
    let var = autocov_with_mean(series, 0, m);
    (0..=max_lag)
        .map(|lag| autocov_with_mean(series, lag, m) / var)
        .collect()
}

/// First lag at which the autocorrelation function is no longer positive.
///
/// Scans upward from lag 0 (where the autocorrelation of any non-constant
/// series is 1) and returns the first lag whose value fails to exceed zero.
/// If no such lag exists below `max_lag`, returns `max_lag` itself; the
/// bound doubles as the answer rather than a distinguished "not found". A
/// zero-variance series has a NaN curve and yields 0.
pub fn first_zero(series: &[f64], max_lag: usize) -> usize {
    if series.is_empty() {
        return 0;
    }
    let m = mean(series);
    let var = autocov_with_mean(series, 0, m);

    let mut lag = 0;
    while lag < max_lag {
        let r = autocov_with_mean(series, lag, m) / var;
        if !(r > 0.0) {
            break;
        }
        lag += 1;
    }
    lag
}

/// First strict local minimum of the autocorrelation function.
///
/// Returns the first lag `i` in `1..max_lag-1` whose autocorrelation is
/// strictly below both neighbors, or `max_lag` if the curve has no interior
/// minimum in range. Downstream consumers treat the fallback as a valid
/// lag.
pub fn first_minimum(series: &[f64], max_lag: usize) -> usize {
    if max_lag < 2 {
        return max_lag;
    }
    let curve = acf(series, max_lag.saturating_sub(1).max(1));
    for i in 1..max_lag - 1 {
        if curve[i] < curve[i - 1] && curve[i] < curve[i + 1] {
            return i;
        }
    }
    max_lag
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sine(n: usize, period: f64) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / period).sin())
            .collect()
    }

    // ==================== autocorr ====================

    #[test]
    fn autocorr_lag_0_is_one() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(autocorr(&series, 0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn autocorr_linear_trend_positive() {
        let series: Vec<f64> = (0..30).map(|i| i as f64).collect();
        assert!(autocorr(&series, 1) > 0.8);
    }

    #[test]
    fn autocorr_alternating_negative() {
        let series: Vec<f64> = (0..30)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        assert!(autocorr(&series, 1) < -0.5);
    }

    #[test]
    fn autocorr_constant_is_nan() {
        assert!(autocorr(&[5.0; 10], 1).is_nan());
    }

    #[test]
    fn autocov_beyond_length_is_zero() {
        let series = vec![1.0, 2.0, 3.0];
        assert_relative_eq!(autocov(&series, 5), 0.0, epsilon = 1e-12);
    }

    // ==================== first_zero ====================

    #[test]
    fn first_zero_sine_quarter_period() {
        // period 40 -> the ACF crosses zero near lag 10
        let series = sine(400, 40.0);
        let lag = first_zero(&series, 400);
        assert!((9..=11).contains(&lag), "got lag {}", lag);
    }

    #[test]
    fn first_zero_alternating_is_one() {
        let series: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        assert_eq!(first_zero(&series, 20), 1);
    }

    #[test]
    fn first_zero_capped_at_max_lag() {
        // strongly trending series stays positively correlated throughout
        let series: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert_eq!(first_zero(&series, 5), 5);
    }

    #[test]
    fn first_zero_constant_is_zero() {
        assert_eq!(first_zero(&[3.0; 10], 10), 0);
    }

    // ==================== first_minimum ====================

    #[test]
    fn first_minimum_sine_half_period() {
        // period 40 -> the ACF has its first trough near lag 20
        let series = sine(400, 40.0);
        let lag = first_minimum(&series, 400);
        assert!((18..=22).contains(&lag), "got lag {}", lag);
    }

    #[test]
    fn first_minimum_fallback_is_max_lag() {
        // monotone ACF decay with no interior trough in a short range
        let series: Vec<f64> = (0..50).map(|i| i as f64).collect();
        assert_eq!(first_minimum(&series, 4), 4);
    }

    #[test]
    fn acf_indexed_by_lag() {
        let series = sine(100, 10.0);
        let curve = acf(&series, 10);
        assert_eq!(curve.len(), 11);
        assert_relative_eq!(curve[0], 1.0, epsilon = 1e-12);
    }
}
