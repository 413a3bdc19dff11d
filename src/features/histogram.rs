//! Equal-width histogram helpers shared by the distribution and
//! embedding features.

use crate::core::stats::{maximum, minimum, stddev};

/// Equal-width histogram between the series' min and max.
///
/// Returns the per-bin counts and the `n_bins + 1` bin edges. Values on
/// the upper boundary land in the last bin.
pub(crate) fn histcounts(series: &[f64], n_bins: usize) -> (Vec<usize>, Vec<f64>) {
    let min_val = minimum(series);
    let max_val = maximum(series);
    let bin_step = (max_val - min_val) / n_bins as f64;

    let mut counts = vec![0usize; n_bins];
    for &x in series {
        let mut idx = if bin_step > 0.0 {
            ((x - min_val) / bin_step) as usize
        } else {
            0
        };
        if idx >= n_bins {
            idx = n_bins - 1;
        }
        counts[idx] += 1;
    }

    let edges = (0..=n_bins)
        .map(|i| min_val + i as f64 * bin_step)
        .collect();
    (counts, edges)
}

/// Bin count from Scott's normal reference rule.
///
/// Returns 0 when the spread is too small to support a data-driven bin
/// width.
pub(crate) fn num_bins_auto(series: &[f64]) -> usize {
    let sd = stddev(series);
    if !(sd >= 0.001) {
        return 0;
    }
    let width = 3.5 * sd / (series.len() as f64).powf(1.0 / 3.0);
    ((maximum(series) - minimum(series)) / width).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn histcounts_uniform_spread() {
        let series = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let (counts, edges) = histcounts(&series, 4);
        // the max value falls into the last bin
        assert_eq!(counts, vec![1, 1, 1, 2]);
        assert_eq!(edges.len(), 5);
        assert_relative_eq!(edges[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(edges[4], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn histcounts_total_preserved() {
        let series: Vec<f64> = (0..100).map(|i| ((i * 37) % 11) as f64).collect();
        let (counts, _) = histcounts(&series, 7);
        assert_eq!(counts.iter().sum::<usize>(), 100);
    }

    #[test]
    fn histcounts_constant_series() {
        let (counts, _) = histcounts(&[2.0; 8], 5);
        assert_eq!(counts[0], 8);
    }

    #[test]
    fn num_bins_auto_grows_with_range() {
        let narrow: Vec<f64> = (0..64).map(|i| (i % 4) as f64).collect();
        let wide: Vec<f64> = (0..64).map(|i| (i % 32) as f64).collect();
        assert!(num_bins_auto(&wide) >= num_bins_auto(&narrow));
        assert!(num_bins_auto(&narrow) > 0);
    }

    #[test]
    fn num_bins_auto_degenerate_spread() {
        assert_eq!(num_bins_auto(&[1.0; 20]), 0);
    }
}
