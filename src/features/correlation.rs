//! Linear and nonlinear correlation features: characteristic ACF
//! timescales, time-reversal asymmetry, embedding-distance statistics,
//! and histogram-based automutual information.

use super::histogram::{histcounts, num_bins_auto};
use crate::core::autocorr::{autocorr, first_minimum, first_zero};
use crate::core::stats::{has_nan, maximum, mean, minimum, stddev};

/// First lag at which the autocorrelation function drops below 1/e.
///
/// Returns the series length when the curve never decays that far.
pub fn f1ecac(series: &[f64]) -> f64 {
    if has_nan(series) || series.is_empty() {
        return f64::NAN;
    }

    let thresh = 1.0 / std::f64::consts::E;
    let n = series.len();
    for lag in 1..n {
        if autocorr(series, lag) < thresh {
            return lag as f64;
        }
    }
    n as f64
}

/// First local minimum of the autocorrelation function.
pub fn first_min_ac(series: &[f64]) -> f64 {
    if has_nan(series) || series.is_empty() {
        return f64::NAN;
    }
    first_minimum(series, series.len()) as f64
}

/// Time-reversal asymmetry: the mean cubed successive difference.
pub fn trev_num(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 2 {
        return f64::NAN;
    }

    let cubed: Vec<f64> = series.windows(2).map(|w| (w[1] - w[0]).powi(3)).collect();
    mean(&cubed)
}

/// Mean deviation between the distribution of two-dimensional embedding
/// distances and its exponential fit.
///
/// Embeds the series at the delay given by the ACF first zero (capped at
/// n/10), measures Euclidean distances between successive embedded
/// points, and compares their histogram against the maximum-likelihood
/// exponential density.
pub fn embed2_dist_tau_expfit_meandiff(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 3 {
        return f64::NAN;
    }

    let n = series.len();
    let mut tau = first_zero(series, n);
    if tau > n / 10 {
        tau = n / 10;
    }
    if n <= tau + 1 {
        return f64::NAN;
    }

    let n_dist = n - tau - 1;
    let distances: Vec<f64> = (0..n_dist)
        .map(|i| {
            let dx = series[i + 1] - series[i];
            let dy = series[i + tau + 1] - series[i + tau];
            (dx * dx + dy * dy).sqrt()
        })
        .collect();

    // rate of the maximum-likelihood exponential fit
    let scale = mean(&distances);

    let n_bins = num_bins_auto(&distances);
    if n_bins == 0 {
        return f64::NAN;
    }
    let (counts, edges) = histcounts(&distances, n_bins);

    let deviations: Vec<f64> = (0..n_bins)
        .map(|i| {
            let center = (edges[i] + edges[i + 1]) * 0.5;
            let expfit = (-center / scale).exp() / scale;
            let empirical = counts[i] as f64 / n_dist as f64;
            (empirical - expfit.max(0.0)).abs()
        })
        .collect();
    mean(&deviations)
}

/// Neighbor counts for a circle translated along the (index, value)
/// embedding of the series.
///
/// Each sample becomes the point `(i, y[i])` with unit time spacing; for
/// every admissible center the count includes all points (the center
/// itself among them) whose squared distance stays within `radius^2`.
/// Returns `None` when the series is shorter than one full circle
/// diameter.
fn translate_shape_circle_counts(series: &[f64], radius: f64) -> Option<Vec<f64>> {
    let n = series.len();
    let w = radius.floor() as usize;
    if n < 2 * w + 1 {
        return None;
    }

    let r2 = radius * radius;
    let counts = (w..n - w)
        .map(|i| {
            let mut inside = 0;
            for j in i - w..=i + w {
                let dt = j as f64 - i as f64;
                let dy = series[j] - series[i];
                if dt * dt + dy * dy <= r2 {
                    inside += 1;
                }
            }
            inside as f64
        })
        .collect();
    Some(counts)
}

/// Spread of the neighbor counts enclosed by a radius-3.5 circle sliding
/// along the time-value embedding.
pub fn translate_shape_circle_35_pts_std(series: &[f64]) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }
    match translate_shape_circle_counts(series, 3.5) {
        Some(counts) => stddev(&counts),
        None => f64::NAN,
    }
}

/// Stationarity of the radius-3.5 neighbor-count sequence: spread of its
/// four segment means relative to its overall spread.
pub fn translate_shape_circle_35_pts_statav4(series: &[f64]) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }
    let counts = match translate_shape_circle_counts(series, 3.5) {
        Some(counts) => counts,
        None => return f64::NAN,
    };

    const NUM_SEGMENTS: usize = 4;
    let seg_len = counts.len() / NUM_SEGMENTS;
    if seg_len == 0 {
        return f64::NAN;
    }

    let seg_means: Vec<f64> = counts
        .chunks_exact(seg_len)
        .take(NUM_SEGMENTS)
        .map(mean)
        .collect();
    stddev(&seg_means) / stddev(&counts)
}

/// Histogram-estimated automutual information at a fixed lag.
///
/// Bins are equal-width over the value range padded by 0.1 on each side;
/// the joint distribution of `(y[i], y[i+tau])` over all valid pairs
/// feeds a plug-in mutual information estimate in nats.
pub fn histogram_ami_even(series: &[f64], tau: usize, n_bins: usize) -> f64 {
    if has_nan(series) || series.len() <= tau || n_bins == 0 {
        return f64::NAN;
    }

    let n_pairs = series.len() - tau;
    let min_val = minimum(series);
    let max_val = maximum(series);

    let bin_step = (max_val - min_val + 0.2) / n_bins as f64;
    let low_edge = min_val - 0.1;

    let bin_of = |x: f64| -> usize {
        let idx = ((x - low_edge) / bin_step) as usize;
        idx.min(n_bins - 1)
    };

    let mut joint = vec![vec![0usize; n_bins]; n_bins];
    for i in 0..n_pairs {
        joint[bin_of(series[i])][bin_of(series[i + tau])] += 1;
    }

    let mut p_row = vec![0.0; n_bins];
    let mut p_col = vec![0.0; n_bins];
    for i in 0..n_bins {
        for j in 0..n_bins {
            let p = joint[i][j] as f64 / n_pairs as f64;
            p_row[i] += p;
            p_col[j] += p;
        }
    }

    let mut ami = 0.0;
    for i in 0..n_bins {
        for j in 0..n_bins {
            if joint[i][j] > 0 {
                let p = joint[i][j] as f64 / n_pairs as f64;
                ami += p * (p / (p_row[i] * p_col[j])).ln();
            }
        }
    }
    ami
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::core::stats::zscore;

    fn sine(n: usize, period: f64) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / period).sin())
            .collect()
    }

    // ==================== f1ecac ====================

    #[test]
    fn f1ecac_sine_before_quarter_period() {
        // cos crosses 1/e around 0.19 of the period
        let series = sine(400, 40.0);
        let lag = f1ecac(&series);
        assert!((7.0..=9.0).contains(&lag), "got {}", lag);
    }

    #[test]
    fn f1ecac_alternating_is_one() {
        let series: Vec<f64> = (0..40)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        assert_relative_eq!(f1ecac(&series), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn f1ecac_nan_guard() {
        assert!(f1ecac(&[1.0, f64::NAN, 2.0]).is_nan());
    }

    // ==================== first_min_ac ====================

    #[test]
    fn first_min_ac_sine_half_period() {
        let series = sine(400, 40.0);
        let lag = first_min_ac(&series);
        assert!((18.0..=22.0).contains(&lag), "got {}", lag);
    }

    #[test]
    fn first_min_ac_nan_guard() {
        assert!(first_min_ac(&[f64::NAN; 10]).is_nan());
    }

    // ==================== trev ====================

    #[test]
    fn trev_symmetric_sine_near_zero() {
        let series = sine(1000, 20.0);
        assert!(trev_num(&series).abs() < 0.05);
    }

    #[test]
    fn trev_sawtooth_asymmetric() {
        // slow rise, sharp fall: cubed differences are sign-skewed
        let series: Vec<f64> = (0..100).map(|i| (i % 10) as f64).collect();
        assert!(trev_num(&series) < 0.0);
    }

    #[test]
    fn trev_known_value() {
        // diffs 1, 2 -> cubes 1, 8 -> mean 4.5
        assert_relative_eq!(trev_num(&[0.0, 1.0, 3.0]), 4.5, epsilon = 1e-12);
    }

    // ==================== embed2_dist ====================

    #[test]
    fn embed2_dist_finite_on_oscillation() {
        let series = zscore(&sine(200, 20.0));
        let out = embed2_dist_tau_expfit_meandiff(&series);
        assert!(out.is_finite(), "got {}", out);
        assert!(out >= 0.0);
    }

    #[test]
    fn embed2_dist_constant_is_nan() {
        // zero spread defeats the automatic binning
        assert!(embed2_dist_tau_expfit_meandiff(&[1.0; 50]).is_nan());
    }

    #[test]
    fn embed2_dist_nan_guard() {
        assert!(embed2_dist_tau_expfit_meandiff(&[1.0, f64::NAN, 2.0, 3.0]).is_nan());
    }

    // ==================== translate shape ====================

    #[test]
    fn translate_shape_counts_constant_series() {
        // every neighbor sits at zero vertical distance: within the
        // radius-3.5 circle that is the full 7-point time window
        let counts = translate_shape_circle_counts(&[2.0; 20], 3.5).unwrap();
        assert_eq!(counts.len(), 14);
        assert!(counts.iter().all(|&c| c == 7.0));
    }

    #[test]
    fn translate_shape_counts_unit_ramp() {
        // slope 1 doubles the squared distance per step, so only offsets
        // up to 2 stay inside: five points per circle, everywhere
        let series: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let counts = translate_shape_circle_counts(&series, 3.5).unwrap();
        assert!(counts.iter().all(|&c| c == 5.0));
    }

    #[test]
    fn translate_shape_std_zero_on_ramp() {
        let series: Vec<f64> = (0..30).map(|i| i as f64).collect();
        assert_relative_eq!(
            translate_shape_circle_35_pts_std(&series),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn translate_shape_std_positive_on_oscillation() {
        // the circle catches more points near the turning points than on
        // the steep flanks
        let series = zscore(&sine(200, 20.0));
        let out = translate_shape_circle_35_pts_std(&series);
        assert!(out > 0.0, "got {}", out);
    }

    #[test]
    fn translate_shape_statav4_small_for_stationary_series() {
        let series = zscore(&sine(400, 20.0));
        let out = translate_shape_circle_35_pts_statav4(&series);
        assert!(out.is_finite(), "got {}", out);
        assert!((0.0..1.0).contains(&out), "got {}", out);
    }

    #[test]
    fn translate_shape_short_series_is_nan() {
        // fewer points than one circle diameter
        assert!(translate_shape_circle_35_pts_std(&[1.0; 6]).is_nan());
        assert!(translate_shape_circle_35_pts_statav4(&[1.0; 6]).is_nan());
    }

    #[test]
    fn translate_shape_nan_guard() {
        let mut series: Vec<f64> = (0..50).map(|i| (i as f64).sin()).collect();
        series[25] = f64::NAN;
        assert!(translate_shape_circle_35_pts_std(&series).is_nan());
        assert!(translate_shape_circle_35_pts_statav4(&series).is_nan());
    }

    // ==================== histogram AMI ====================

    #[test]
    fn histogram_ami_periodic_beats_noise() {
        let periodic = zscore(&sine(300, 10.0));
        let noisy: Vec<f64> = (0..300)
            .map(|i| ((i as f64 * 12.9898).sin() * 43758.5453).fract())
            .collect();
        let ami_periodic = histogram_ami_even(&periodic, 2, 5);
        let ami_noise = histogram_ami_even(&zscore(&noisy), 2, 5);
        assert!(
            ami_periodic > ami_noise,
            "periodic {} vs noise {}",
            ami_periodic,
            ami_noise
        );
    }

    #[test]
    fn histogram_ami_non_negative() {
        let series = zscore(&sine(100, 7.0));
        for (tau, bins) in [(2, 5), (2, 3), (10, 3)] {
            let ami = histogram_ami_even(&series, tau, bins);
            assert!(ami >= -1e-12, "tau={} bins={} got {}", tau, bins, ami);
        }
    }

    #[test]
    fn histogram_ami_short_is_nan() {
        assert!(histogram_ami_even(&[1.0, 2.0], 2, 5).is_nan());
        assert!(histogram_ami_even(&[1.0, 2.0, 3.0], 10, 3).is_nan());
    }
}
