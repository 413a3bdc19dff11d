//! Segment-based stationarity and local-extrema features.

use crate::core::stats::{has_nan, maximum, mean, minimum, stddev};

/// Minimum segment mean over the mean segment variance, for fixed
/// 50-point segments.
///
/// A drifting location shows up as segment means wandering relative to
/// the typical within-segment variability.
pub fn drifting_mean50_min(series: &[f64]) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }

    const SEGMENT_LEN: usize = 50;
    let num_segments = series.len() / SEGMENT_LEN;
    if num_segments == 0 {
        return f64::NAN;
    }

    let mut seg_means = Vec::with_capacity(num_segments);
    let mut seg_vars = Vec::with_capacity(num_segments);
    for seg in series.chunks_exact(SEGMENT_LEN) {
        seg_means.push(mean(seg));
        let sd = stddev(seg);
        seg_vars.push(sd * sd);
    }

    minimum(&seg_means) / mean(&seg_vars)
}

/// Mean difference between the local maximum and the absolute local
/// minimum over n/100 windows.
pub fn local_extrema_n100_diffmaxabsmin(series: &[f64]) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }

    const NUM_WINDOWS: usize = 100;
    let window_len = series.len() / NUM_WINDOWS;
    if window_len == 0 {
        return f64::NAN;
    }

    let diffs: Vec<f64> = series
        .chunks_exact(window_len)
        .map(|w| (maximum(w) - minimum(w).abs()).abs())
        .collect();
    mean(&diffs)
}
