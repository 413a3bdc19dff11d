//! Local-forecast residual analysis.
//!
//! A fixed-length training window slides across the series; each window
//! forecasts the next point (window mean, or a linear extrapolation) and
//! the residual sequence is reduced to one scalar. All entry points are
//! stateless per call and NaN-total: a NaN anywhere in the input, or a
//! window that leaves no evaluation range, yields NaN.

use super::autocorr::first_zero;
use super::regression::linreg;
use super::stats::{diff, has_nan, maximum, mean, minimum, stddev};

/// Residuals of the window-mean forecast: for each start index `i`,
/// `y[i + w] - mean(y[i..i+w])`. Returns `None` when no window fits.
pub fn mean_forecast_residuals(series: &[f64], train_length: usize) -> Option<Vec<f64>> {
    let n = series.len();
    if train_length == 0 || n <= train_length {
        return None;
    }

    let residuals = (0..n - train_length)
        .map(|i| {
            let window = &series[i..i + train_length];
            series[i + train_length] - mean(window)
        })
        .collect();
    Some(residuals)
}

/// Standard deviation of the window-mean forecast residuals.
pub fn local_mean_stderr(series: &[f64], train_length: usize) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }
    match mean_forecast_residuals(series, train_length) {
        Some(res) => stddev(&res),
        None => f64::NAN,
    }
}

/// First-zero lag of the residual autocorrelation, relative to the raw
/// series' own first-zero lag.
///
/// Values below 1 mean the window-mean forecast whitened the series: its
/// residuals decorrelate faster than the raw data.
pub fn local_mean_tauresrat(series: &[f64], train_length: usize) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }
    let res = match mean_forecast_residuals(series, train_length) {
        Some(res) => res,
        None => return f64::NAN,
    };

    let res_tau = first_zero(&res, res.len());
    let raw_tau = first_zero(series, series.len());
    res_tau as f64 / raw_tau as f64
}

/// First-zero lag of the residual autocorrelation itself.
pub fn local_mean_taures(series: &[f64], train_length: usize) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }
    match mean_forecast_residuals(series, train_length) {
        Some(res) => first_zero(&res, res.len()) as f64,
        None => f64::NAN,
    }
}

/// First-zero lag of the residuals of a local linear forecast.
///
/// The training length is itself derived from the data as the raw series'
/// ACF first-zero lag. Each window is fit by least squares over the
/// support `1..=w` and extrapolated one step to `w + 1`.
pub fn local_linear_taures(series: &[f64]) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }
    let n = series.len();
    let train_length = first_zero(series, n);
    if train_length == 0 || n <= train_length {
        return f64::NAN;
    }

    let x_reg: Vec<f64> = (1..=train_length).map(|i| i as f64).collect();

    let residuals: Vec<f64> = (0..n - train_length)
        .map(|i| {
            let fit = linreg(&x_reg, &series[i..i + train_length]);
            let forecast = fit.slope * (train_length + 1) as f64 + fit.intercept;
            series[i + train_length] - forecast
        })
        .collect();

    first_zero(&residuals, residuals.len()) as f64
}

/// Window-mean forecast error spread at one training length, used by the
/// multi-scale sweep. Sign convention is forecast minus actual; the
/// spread is unaffected.
fn sliding_mean_stderr(series: &[f64], train_length: usize) -> f64 {
    let n = series.len();
    if train_length == 0 || n <= train_length {
        return f64::NAN;
    }

    let errors: Vec<f64> = (0..n - train_length)
        .map(|i| mean(&series[i..i + train_length]) - series[i + train_length])
        .collect();
    stddev(&errors)
}

/// Sensitivity of the forecast-error spread to the training-window size.
///
/// Sweeps the training length over `1..=10`, takes the first difference of
/// the resulting spread curve, and normalizes its mean by the curve's
/// range. A scale with no evaluation windows makes the whole statistic
/// NaN.
pub fn loop_mean_stderr_chn(series: &[f64]) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }

    const TRAIN_LENGTH_RANGE: usize = 10;

    let scale_curve: Vec<f64> = (1..=TRAIN_LENGTH_RANGE)
        .map(|w| sliding_mean_stderr(series, w))
        .collect();

    let range = maximum(&scale_curve) - minimum(&scale_curve);
    mean(&diff(&scale_curve)) / range
}
