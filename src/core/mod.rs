//! Shared algorithmic substrate for the feature catalog.
//!
//! Almost every catalog entry is a short composition of these engines:
//! basic statistics, closed-form regression, the autocorrelation scans,
//! Gaussian automutual information, and local-forecast residual analysis.

pub mod ami;
pub mod autocorr;
pub mod forecast;
pub mod regression;
pub mod stats;

pub use ami::{diff_ami, first_minimum_ami, gaussian_ami};
pub use autocorr::{acf, autocorr, autocov, first_minimum, first_zero};
pub use forecast::{
    local_linear_taures, local_mean_stderr, local_mean_taures, local_mean_tauresrat,
    loop_mean_stderr_chn, mean_forecast_residuals,
};
pub use regression::{linreg, slope_stderr, LineFit};
pub use stats::{
    abs_diff, cumsum, diff, has_nan, linspace, maximum, mean, median, minimum, quantile, stddev,
    zscore,
};
