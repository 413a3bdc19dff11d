//! Local-forecast features with baked catalog parameters.

use crate::core::forecast::{
    local_linear_taures, local_mean_stderr, local_mean_taures, local_mean_tauresrat,
    loop_mean_stderr_chn,
};

/// Residual spread of a window-mean forecast with a 3-point training
/// window.
pub fn local_simple_mean3_stderr(series: &[f64]) -> f64 {
    local_mean_stderr(series, 3)
}

/// Residual decorrelation lag of a 1-point window-mean forecast, relative
/// to the raw series' decorrelation lag.
pub fn local_simple_mean1_tauresrat(series: &[f64]) -> f64 {
    local_mean_tauresrat(series, 1)
}

/// Residual decorrelation lag of a 1-point window-mean forecast.
pub fn local_simple_mean1_taures(series: &[f64]) -> f64 {
    local_mean_taures(series, 1)
}

/// Residual decorrelation lag of a local linear forecast whose window is
/// set by the raw series' decorrelation lag.
pub fn local_simple_lfit_taures(series: &[f64]) -> f64 {
    local_linear_taures(series)
}

/// Window-size sensitivity of the forecast-error spread over training
/// lengths 1..=10.
pub fn loop_local_simple_mean_stderr_chn(series: &[f64]) -> f64 {
    loop_mean_stderr_chn(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean3_stderr_linear_ramp_is_zero() {
        let ramp: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        assert_relative_eq!(local_simple_mean3_stderr(&ramp), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn all_wrappers_nan_on_nan_input() {
        let series = vec![1.0, f64::NAN, 3.0, 4.0, 5.0];
        assert!(local_simple_mean3_stderr(&series).is_nan());
        assert!(local_simple_mean1_tauresrat(&series).is_nan());
        assert!(local_simple_mean1_taures(&series).is_nan());
        assert!(local_simple_lfit_taures(&series).is_nan());
        assert!(loop_local_simple_mean_stderr_chn(&series).is_nan());
    }
}
