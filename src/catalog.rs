//! Tagged feature registry.
//!
//! Maps the fixed, canonical feature names to typed callables together
//! with their pre-normalization contract. This is the only dispatch
//! surface of the crate; feature parameters are baked into the names and
//! are not configurable at call time.

use crate::core::stats::zscore;
use crate::error::{FeatureError, Result};
use crate::features::{correlation, distribution, fluctuation, forecasting, information};
use crate::features::{periodicity, spectral, stationarity, symbolic, walker};
use std::collections::BTreeMap;

/// One catalog entry: a canonical name, the pre-normalization flag, and
/// the feature function itself.
#[derive(Clone, Copy)]
pub struct FeatureDef {
    /// Canonical feature identifier with its parameters baked in.
    pub name: &'static str,
    /// Whether the boundary z-scores the input before the call.
    pub normalize: bool,
    func: fn(&[f64]) -> f64,
}

impl std::fmt::Debug for FeatureDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureDef")
            .field("name", &self.name)
            .field("normalize", &self.normalize)
            .finish()
    }
}

fn histogram_mode_5(series: &[f64]) -> f64 {
    distribution::histogram_mode(series, 5)
}

fn histogram_mode_10(series: &[f64]) -> f64 {
    distribution::histogram_mode(series, 10)
}

fn outlier_include_p(series: &[f64]) -> f64 {
    distribution::outlier_include_mdrmd(series, true)
}

fn outlier_include_n(series: &[f64]) -> f64 {
    distribution::outlier_include_mdrmd(series, false)
}

fn histogram_ami_even_2_5(series: &[f64]) -> f64 {
    correlation::histogram_ami_even(series, 2, 5)
}

fn histogram_ami_even_2_3(series: &[f64]) -> f64 {
    correlation::histogram_ami_even(series, 2, 3)
}

fn histogram_ami_even_10_3(series: &[f64]) -> f64 {
    correlation::histogram_ami_even(series, 10, 3)
}

static CATALOG: &[FeatureDef] = &[
    FeatureDef {
        name: "DN_Mean",
        normalize: false,
        func: distribution::raw_mean,
    },
    FeatureDef {
        name: "DN_Spread_Std",
        normalize: false,
        func: distribution::raw_spread_std,
    },
    FeatureDef {
        name: "DN_HistogramMode_5",
        normalize: true,
        func: histogram_mode_5,
    },
    FeatureDef {
        name: "DN_HistogramMode_10",
        normalize: true,
        func: histogram_mode_10,
    },
    FeatureDef {
        name: "DN_OutlierInclude_p_001_mdrmd",
        normalize: true,
        func: outlier_include_p,
    },
    FeatureDef {
        name: "DN_OutlierInclude_n_001_mdrmd",
        normalize: true,
        func: outlier_include_n,
    },
    FeatureDef {
        name: "DN_RemovePoints_absclose_05_ac2rat",
        normalize: true,
        func: distribution::remove_points_absclose_ac2rat,
    },
    FeatureDef {
        name: "CO_f1ecac",
        normalize: true,
        func: correlation::f1ecac,
    },
    FeatureDef {
        name: "CO_FirstMin_ac",
        normalize: true,
        func: correlation::first_min_ac,
    },
    FeatureDef {
        name: "CO_trev_1_num",
        normalize: true,
        func: correlation::trev_num,
    },
    FeatureDef {
        name: "CO_Embed2_Dist_tau_d_expfit_meandiff",
        normalize: true,
        func: correlation::embed2_dist_tau_expfit_meandiff,
    },
    FeatureDef {
        name: "CO_HistogramAMI_even_2_5",
        normalize: true,
        func: histogram_ami_even_2_5,
    },
    FeatureDef {
        name: "CO_HistogramAMI_even_2_3",
        normalize: true,
        func: histogram_ami_even_2_3,
    },
    FeatureDef {
        name: "CO_HistogramAMI_even_10_3",
        normalize: true,
        func: histogram_ami_even_10_3,
    },
    FeatureDef {
        name: "CO_TranslateShape_circle_35_pts_statav4_m",
        normalize: true,
        func: correlation::translate_shape_circle_35_pts_statav4,
    },
    FeatureDef {
        name: "CO_TranslateShape_circle_35_pts_std",
        normalize: true,
        func: correlation::translate_shape_circle_35_pts_std,
    },
    FeatureDef {
        name: "IN_AutoMutualInfoStats_40_gaussian_fmmi",
        normalize: true,
        func: information::auto_mutual_info_first_min_40,
    },
    FeatureDef {
        name: "IN_AutoMutualInfoStats_diff_20_gaussian_ami8",
        normalize: true,
        func: information::auto_mutual_info_diff_ami8,
    },
    FeatureDef {
        name: "FC_LocalSimple_mean3_stderr",
        normalize: true,
        func: forecasting::local_simple_mean3_stderr,
    },
    FeatureDef {
        name: "FC_LocalSimple_mean1_tauresrat",
        normalize: true,
        func: forecasting::local_simple_mean1_tauresrat,
    },
    FeatureDef {
        name: "FC_LocalSimple_mean1_taures",
        normalize: true,
        func: forecasting::local_simple_mean1_taures,
    },
    FeatureDef {
        name: "FC_LocalSimple_lfit_taures",
        normalize: true,
        func: forecasting::local_simple_lfit_taures,
    },
    FeatureDef {
        name: "FC_LoopLocalSimple_mean_stderr_chn",
        normalize: true,
        func: forecasting::loop_local_simple_mean_stderr_chn,
    },
    FeatureDef {
        name: "MD_hrv_classic_pnn40",
        normalize: true,
        func: distribution::hrv_pnn40,
    },
    FeatureDef {
        name: "SB_BinaryStats_mean_longstretch1",
        normalize: true,
        func: symbolic::binary_stats_mean_longstretch1,
    },
    FeatureDef {
        name: "SB_BinaryStats_diff_longstretch0",
        normalize: true,
        func: symbolic::binary_stats_diff_longstretch0,
    },
    FeatureDef {
        name: "SB_MotifThree_quantile_hh",
        normalize: true,
        func: symbolic::motif_three_quantile_hh,
    },
    FeatureDef {
        name: "SB_TransitionMatrix_3ac_sumdiagcov",
        normalize: true,
        func: symbolic::transition_matrix_3ac_sumdiagcov,
    },
    FeatureDef {
        name: "SP_Summaries_welch_rect_area_5_1",
        normalize: true,
        func: spectral::welch_rect_area_5_1,
    },
    FeatureDef {
        name: "SP_Summaries_welch_rect_centroid",
        normalize: true,
        func: spectral::welch_rect_centroid,
    },
    FeatureDef {
        name: "SC_FluctAnal_2_rsrangefit_50_1_logi_prop_r1",
        normalize: true,
        func: fluctuation::fluct_anal_rsrangefit_prop_r1,
    },
    FeatureDef {
        name: "SC_FluctAnal_2_dfa_50_1_2_logi_prop_r1",
        normalize: true,
        func: fluctuation::fluct_anal_dfa_prop_r1,
    },
    FeatureDef {
        name: "SC_FluctAnal_2_dfa_50_2_logi_r2_se2",
        normalize: true,
        func: fluctuation::fluct_anal_dfa_se2,
    },
    FeatureDef {
        name: "PD_PeriodicityWang_th0_01",
        normalize: true,
        func: periodicity::periodicity_wang_th001,
    },
    FeatureDef {
        name: "SY_DriftingMean50_min",
        normalize: true,
        func: stationarity::drifting_mean50_min,
    },
    FeatureDef {
        name: "ST_LocalExtrema_n100_diffmaxabsmin",
        normalize: true,
        func: stationarity::local_extrema_n100_diffmaxabsmin,
    },
    FeatureDef {
        name: "PH_Walker_momentum_5_w_momentumzcross",
        normalize: true,
        func: walker::walker_momentum5_zcross,
    },
    FeatureDef {
        name: "PH_Walker_biasprop_05_01_sw_meanabsdiff",
        normalize: true,
        func: walker::walker_biasprop_meanabsdiff,
    },
];

/// The full, fixed feature table.
pub fn catalog() -> &'static [FeatureDef] {
    CATALOG
}

/// Computes one feature by its canonical name.
///
/// Applies the feature's pre-normalization contract (z-scoring) before
/// the call. The input slice is never modified; the boundary works on its
/// own copy. NaN results are returned unchanged.
pub fn compute(name: &str, series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(FeatureError::EmptyInput);
    }

    let def = CATALOG
        .iter()
        .find(|def| def.name == name)
        .ok_or_else(|| FeatureError::UnknownFeature(name.to_string()))?;

    Ok(run(def, series))
}

/// Computes every catalog feature, keyed by canonical name.
pub fn compute_all(series: &[f64]) -> Result<BTreeMap<&'static str, f64>> {
    if series.is_empty() {
        return Err(FeatureError::EmptyInput);
    }

    Ok(CATALOG
        .iter()
        .map(|def| (def.name, run(def, series)))
        .collect())
}

fn run(def: &FeatureDef, series: &[f64]) -> f64 {
    if def.normalize {
        (def.func)(&zscore(series))
    } else {
        (def.func)(series)
    }
}
