//! Automutual-information features with baked catalog parameters.

use crate::core::ami::{diff_ami, first_minimum_ami};

/// First minimum of the Gaussian automutual information, probed over lags
/// up to 40.
pub fn auto_mutual_info_first_min_40(series: &[f64]) -> f64 {
    first_minimum_ami(series, 40)
}

/// Gaussian automutual information of the differenced series at lag 8,
/// with the probe range bounded at 20.
pub fn auto_mutual_info_diff_ami8(series: &[f64]) -> f64 {
    diff_ami(series, 20, 8)
}
