//! Gaussian-approximation automutual information.
//!
//! The mutual information between a series and its lagged self is estimated
//! from the lagged Pearson correlation under a Gaussian assumption, which
//! reduces the whole computation to the autocorrelation engine.

use super::autocorr::autocorr;
use super::stats::{diff, has_nan};

/// Gaussian mutual information implied by a correlation coefficient:
/// `-0.5 * ln(1 - r^2)`.
///
/// Saturated correlation (|r| = 1) yields +inf, which is propagated.
pub fn gaussian_ami(r: f64) -> f64 {
    -0.5 * (1.0 - r * r).ln()
}

/// Automutual information curve over lags `1..=max_tau`.
pub fn ami_curve(series: &[f64], max_tau: usize) -> Vec<f64> {
    (1..=max_tau)
        .map(|lag| gaussian_ami(autocorr(series, lag)))
        .collect()
}

/// Position of the first strict local minimum on the automutual
/// information curve.
///
/// The maximum probe lag is clamped to `ceil(n/2)` so that every
/// autocorrelation estimate keeps at least half the series' overlap. When
/// the curve has no interior minimum the clamped bound itself is returned.
/// Any NaN in the input yields NaN.
pub fn first_minimum_ami(series: &[f64], max_tau: usize) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }

    let half = (series.len() as f64 / 2.0).ceil() as usize;
    let tau = max_tau.min(half);

    let ami = ami_curve(series, tau);
    for i in 1..tau.saturating_sub(1) {
        if ami[i] < ami[i - 1] && ami[i] < ami[i + 1] {
            return i as f64;
        }
    }
    tau as f64
}

/// Automutual information of the first-differenced series at `probe_lag`.
///
/// The lag bound is clamped to half the differenced length; the statistic
/// is only defined when the clamped bound still spans the probe
/// neighborhood (bound >= probe_lag - 1), otherwise NaN. Any NaN in the
/// input yields NaN.
pub fn diff_ami(series: &[f64], max_tau: usize, probe_lag: usize) -> f64 {
    if has_nan(series) || series.len() < 2 {
        return f64::NAN;
    }

    let differenced = diff(series);

    let half = (differenced.len() as f64 / 2.0).ceil() as usize;
    let tau = max_tau.min(half);

    let ami = gaussian_ami(autocorr(&differenced, probe_lag));

    if tau >= probe_lag - 1 {
        ami
    } else {
        f64::NAN
    }
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

    // ==================== gaussian_ami ====================

    #[test]
    fn gaussian_ami_zero_correlation() {
        assert_relative_eq!(gaussian_ami(0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn gaussian_ami_symmetric_in_r() {
        assert_relative_eq!(gaussian_ami(0.5), gaussian_ami(-0.5), epsilon = 1e-12);
    }

    #[test]
    fn gaussian_ami_saturated_is_infinite() {
        assert!(gaussian_ami(1.0).is_infinite());
        assert!(gaussian_ami(-1.0).is_infinite());
    }

    // ==================== first_minimum_ami ====================

    #[test]
    fn first_minimum_ami_periodic() {
        // AMI dips where the ACF passes through zero, near a quarter period
        let series = sine(400, 40.0);
        let lag = first_minimum_ami(&series, 40);
        assert!((8.0..=12.0).contains(&lag), "got lag {}", lag);
    }

    #[test]
    fn first_minimum_ami_nan_guard() {
        let mut series = sine(100, 10.0);
        series[50] = f64::NAN;
        assert!(first_minimum_ami(&series, 40).is_nan());
    }

    #[test]
    fn first_minimum_ami_clamps_to_half_length() {
        // n = 4 -> bound 2, which leaves no interior lag to scan, so the
        // clamped bound itself comes back
        let series = vec![0.0, 1.0, 2.0, 3.0];
        let lag = first_minimum_ami(&series, 40);
        assert_relative_eq!(lag, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn first_minimum_ami_never_exceeds_bound() {
        let series: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let lag = first_minimum_ami(&series, 40);
        assert!(lag <= 5.0, "got lag {}", lag);
    }

    // ==================== diff_ami ====================

    #[test]
    fn diff_ami_defined_for_long_series() {
        let series = sine(100, 10.0);
        let ami = diff_ami(&series, 20, 8);
        assert!(ami.is_finite());
        assert!(ami >= 0.0);
    }

    #[test]
    fn diff_ami_undefined_for_short_series() {
        // differenced length 11 -> bound 6 < probe neighborhood
        let series: Vec<f64> = (0..12).map(|i| (i as f64).sin()).collect();
        assert!(diff_ami(&series, 20, 8).is_nan());
    }

    #[test]
    fn diff_ami_nan_guard() {
        let mut series = sine(100, 10.0);
        series[3] = f64::NAN;
        assert!(diff_ami(&series, 20, 8).is_nan());
    }
}
