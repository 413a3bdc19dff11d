//! Symbolic and run-length features: binarized stretch statistics,
//! quantile-alphabet motif entropy, and coarse-grained transition
//! matrices.

use crate::core::autocorr::first_zero;
use crate::core::stats::{covariance, has_nan, linspace, mean, quantile};

/// Maps each value to a symbol in `0..num_groups` by equiprobable
/// (quantile) binning. Symbol `k` covers the value range between the k-th
/// and (k+1)-th quantile thresholds, lower-exclusive.
pub(crate) fn coarse_grain_quantile(series: &[f64], num_groups: usize) -> Vec<usize> {
    let probs = linspace(0.0, 1.0, num_groups + 1);
    let mut thresholds: Vec<f64> = probs.iter().map(|&q| quantile(series, q)).collect();
    // open the bottom edge so the minimum lands in symbol 0
    thresholds[0] -= 1.0;

    series
        .iter()
        .map(|&x| {
            let mut label = 0;
            for k in 0..num_groups {
                if x > thresholds[k] && x <= thresholds[k + 1] {
                    label = k;
                    break;
                }
            }
            label
        })
        .collect()
}

/// Longest run of above-mean values in the mean-binarized series.
///
/// The scan covers the first n-1 points and measures runs as gaps between
/// off-symbols, reproducing the source's run accounting exactly.
pub fn binary_stats_mean_longstretch1(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 2 {
        return f64::NAN;
    }

    let n = series.len();
    let m = mean(series);
    let bits: Vec<bool> = series[..n - 1].iter().map(|&x| x - m > 0.0).collect();

    longest_gap_between(&bits, false)
}

/// Longest run of decreases in the increase/decrease-binarized series.
pub fn binary_stats_diff_longstretch0(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 2 {
        return f64::NAN;
    }

    let bits: Vec<bool> = series.windows(2).map(|w| w[1] - w[0] >= 0.0).collect();

    longest_gap_between(&bits, true)
}

/// Longest index gap between occurrences of `marker` (counting the final
/// index as an implicit marker).
fn longest_gap_between(bits: &[bool], marker: bool) -> f64 {
    let mut max_stretch = 0;
    let mut last = 0;
    for i in 0..bits.len() {
        if bits[i] == marker || i == bits.len() - 1 {
            let stretch = i - last;
            if stretch > max_stretch {
                max_stretch = stretch;
            }
            last = i;
        }
    }
    max_stretch as f64
}

/// Shannon entropy (nats) of two-letter words over a three-symbol
/// quantile alphabet.
pub fn motif_three_quantile_hh(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 2 {
        return f64::NAN;
    }

    const ALPHABET: usize = 3;
    let symbols = coarse_grain_quantile(series, ALPHABET);

    let n_words = series.len() - 1;
    let mut counts = [[0usize; ALPHABET]; ALPHABET];
    for w in symbols.windows(2) {
        counts[w[0]][w[1]] += 1;
    }

    let mut entropy = 0.0;
    for row in &counts {
        for &c in row {
            if c > 0 {
                let p = c as f64 / n_words as f64;
                entropy -= p * p.ln();
            }
        }
    }
    entropy
}

/// Trace of the covariance between transition-matrix columns for a
/// three-symbol alphabet.
///
/// The series is downsampled at its ACF first-zero lag before
/// coarse-graining, so the symbols describe structure at the series' own
/// decorrelation timescale.
pub fn transition_matrix_3ac_sumdiagcov(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 2 {
        return f64::NAN;
    }

    const NUM_GROUPS: usize = 3;
    let n = series.len();

    let mut tau = first_zero(series, n);
    if tau > n / 2 {
        tau = n / 2;
    }
    if tau == 0 {
        return f64::NAN;
    }

    let down: Vec<f64> = series.iter().step_by(tau).copied().collect();
    if down.len() < 2 {
        return f64::NAN;
    }

    let symbols = coarse_grain_quantile(&down, NUM_GROUPS);

    let n_trans = down.len() - 1;
    let mut t = [[0.0f64; NUM_GROUPS]; NUM_GROUPS];
    for w in symbols.windows(2) {
        t[w[0]][w[1]] += 1.0;
    }
    for row in t.iter_mut() {
        for v in row.iter_mut() {
            *v /= n_trans as f64;
        }
    }

    let columns: Vec<Vec<f64>> = (0..NUM_GROUPS)
        .map(|j| (0..NUM_GROUPS).map(|i| t[i][j]).collect())
        .collect();

    (0..NUM_GROUPS)
        .map(|j| covariance(&columns[j], &columns[j]))
        .sum()
}
