//! Distribution-shape features: histogram modes, outlier-timing
//! statistics, and trimmed-series correlation ratios.

use super::histogram::histcounts;
use crate::core::autocorr::autocorr;
use crate::core::stats::{diff, has_nan, maximum, mean, median, stddev};

/// Location of the series: the arithmetic mean of the raw values.
pub fn raw_mean(series: &[f64]) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }
    mean(series)
}

/// Spread of the series: the sample standard deviation of the raw values.
pub fn raw_spread_std(series: &[f64]) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }
    stddev(series)
}

/// Mode of an equal-width histogram of the values.
///
/// Ties on the maximum count are resolved by averaging the tied bin
/// centers.
pub fn histogram_mode(series: &[f64], n_bins: usize) -> f64 {
    if has_nan(series) || series.is_empty() || n_bins == 0 {
        return f64::NAN;
    }

    let (counts, edges) = histcounts(series, n_bins);
    let max_count = *counts.iter().max().unwrap_or(&0);

    let mut out = 0.0;
    let mut num_maxs = 0;
    for i in 0..n_bins {
        if counts[i] == max_count {
            out += (edges[i] + edges[i + 1]) * 0.5;
            num_maxs += 1;
        }
    }
    out / num_maxs as f64
}

/// Median timing drift of increasingly extreme positive or negative
/// values.
///
/// Sweeps a threshold upward in steps of 0.01 over the (sign-flipped)
/// series; at each level the indices of over-threshold points are reduced
/// to a relative median position. The output is the median of that curve
/// over the informative threshold range (at least 2% of the points above
/// threshold and a defined spacing statistic).
pub fn outlier_include_mdrmd(series: &[f64], positive: bool) -> f64 {
    if has_nan(series) || series.is_empty() {
        return f64::NAN;
    }

    let inc = 0.01;
    let n = series.len();
    let sign = if positive { 1.0 } else { -1.0 };
    let work: Vec<f64> = series.iter().map(|x| sign * x).collect();

    if work.iter().all(|&x| x == work[0]) {
        return 0.0;
    }

    let tot = work.iter().filter(|&&x| x >= 0.0).count();
    let max_val = maximum(&work);
    if max_val < inc {
        return 0.0;
    }

    let n_thresh = (max_val / inc) as usize + 1;

    // per-threshold statistics of the over-threshold index sequence
    let mut spacing_mean = Vec::with_capacity(n_thresh);
    let mut coverage_pct = Vec::with_capacity(n_thresh);
    let mut median_drift = Vec::with_capacity(n_thresh);

    for j in 0..n_thresh {
        let th = j as f64 * inc;
        let r: Vec<f64> = work
            .iter()
            .enumerate()
            .filter(|(_, &x)| x >= th)
            .map(|(i, _)| (i + 1) as f64)
            .collect();

        let gaps = diff(&r);
        spacing_mean.push(mean(&gaps));
        coverage_pct.push((r.len() as f64 - 1.0) * 100.0 / tot as f64);
        median_drift.push(median(&r) / (n as f64 / 2.0) - 1.0);
    }

    // trim to thresholds that keep >2% coverage and a defined spacing
    let trim_thr = 2.0;
    let mut mj = 0;
    let mut fbi = n_thresh - 1;
    for i in 0..n_thresh {
        if coverage_pct[i] > trim_thr {
            mj = i;
        }
        if spacing_mean[n_thresh - 1 - i].is_nan() {
            fbi = n_thresh - 1 - i;
        }
    }

    let trim_limit = mj.min(fbi);
    median(&median_drift[..=trim_limit])
}

/// Lag-2 autocorrelation ratio after removing the half of the points
/// closest to zero.
///
/// Keeps the 50% of points with the largest absolute value (in their
/// original order) and compares the trimmed lag-2 autocorrelation against
/// the raw one.
pub fn remove_points_absclose_ac2rat(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 2 {
        return f64::NAN;
    }

    let n = series.len();
    let keep_count = (n as f64 * 0.5).round() as usize;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        series[b]
            .abs()
            .partial_cmp(&series[a].abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept = order[..keep_count].to_vec();
    kept.sort_unstable();
    let trimmed: Vec<f64> = kept.iter().map(|&i| series[i]).collect();

    autocorr(&trimmed, 2) / autocorr(series, 2)
}

/// Proportion of successive differences exceeding 0.04.
///
/// The heart-rate-variability pNN statistic applied to the series scaled
/// by 1000, with a 40 ms threshold.
pub fn hrv_pnn40(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 2 {
        return f64::NAN;
    }

    let over = diff(series)
        .iter()
        .filter(|d| d.abs() * 1000.0 > 40.0)
        .count();
    over as f64 / (series.len() - 1) as f64
}
