//! The feature catalog: thin compositions of the core engines plus
//! small bespoke loops, grouped by concern.
//!
//! Every public function here takes a series slice and returns one
//! scalar, with NaN as the only failure marker. Most catalog entries
//! expect a z-scored input; the [`crate::catalog`] registry applies that
//! contract automatically.

pub mod correlation;
pub mod distribution;
pub mod fluctuation;
pub mod forecasting;
mod histogram;
pub mod information;
pub mod periodicity;
pub mod spectral;
pub mod stationarity;
pub mod symbolic;
pub mod walker;

pub use correlation::{
    embed2_dist_tau_expfit_meandiff, f1ecac, first_min_ac, histogram_ami_even,
    translate_shape_circle_35_pts_statav4, translate_shape_circle_35_pts_std, trev_num,
};
pub use distribution::{
    histogram_mode, hrv_pnn40, outlier_include_mdrmd, raw_mean, raw_spread_std,
    remove_points_absclose_ac2rat,
};
pub use fluctuation::{fluct_anal_dfa_prop_r1, fluct_anal_dfa_se2, fluct_anal_rsrangefit_prop_r1};
pub use forecasting::{
    local_simple_lfit_taures, local_simple_mean1_taures, local_simple_mean1_tauresrat,
    local_simple_mean3_stderr, loop_local_simple_mean_stderr_chn,
};
pub use information::{auto_mutual_info_diff_ami8, auto_mutual_info_first_min_40};
pub use periodicity::periodicity_wang_th001;
pub use spectral::{welch_rect_area_5_1, welch_rect_centroid};
pub use stationarity::{drifting_mean50_min, local_extrema_n100_diffmaxabsmin};
pub use symbolic::{
    binary_stats_diff_longstretch0, binary_stats_mean_longstretch1, motif_three_quantile_hh,
    transition_matrix_3ac_sumdiagcov,
};
pub use walker::{walker_biasprop_meanabsdiff, walker_momentum5_zcross};
