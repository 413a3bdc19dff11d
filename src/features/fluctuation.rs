//! Fluctuation analysis: detrended fluctuation and rescaled-range
//! statistics over log-spaced window sizes, summarized by a two-regime
//! fit of the log-log fluctuation curve.

use crate::core::regression::{linreg, slope_stderr};
use crate::core::stats::{has_nan, norm};

const N_TAU_STEPS: usize = 50;
const MIN_TAU: f64 = 5.0;
const MIN_REGIME_POINTS: usize = 6;

#[derive(Clone, Copy)]
enum FluctKind {
    /// squared range of the detrended window
    RangeFit,
    /// mean squared residual of the detrended window
    Dfa,
}

enum TwoRegimeStat {
    /// proportion of scales assigned to the first regime
    PropR1,
    /// standard error of the second regime's slope
    SlopeStderrR2,
}

/// Log-spaced integer window sizes from 5 to n/2, deduplicated.
fn log_spaced_taus(n: usize) -> Vec<usize> {
    let lin_low = MIN_TAU.ln();
    let lin_high = ((n / 2) as f64).ln();
    let step = (lin_high - lin_low) / (N_TAU_STEPS - 1) as f64;

    let mut taus: Vec<usize> = (0..N_TAU_STEPS)
        .map(|i| (lin_low + i as f64 * step).exp().round() as usize)
        .collect();
    taus.dedup();
    taus
}

fn fluctuation_curve(profile: &[f64], taus: &[usize], kind: FluctKind) -> Vec<f64> {
    let x_reg: Vec<f64> = (1..=taus[taus.len() - 1]).map(|i| i as f64).collect();

    taus.iter()
        .map(|&tau| {
            let n_windows = profile.len() / tau;
            let mut f = 0.0;
            for j in 0..n_windows {
                let window = &profile[j * tau..(j + 1) * tau];
                let fit = linreg(&x_reg[..tau], window);

                match kind {
                    FluctKind::RangeFit => {
                        let mut lo = f64::INFINITY;
                        let mut hi = f64::NEG_INFINITY;
                        for (k, &v) in window.iter().enumerate() {
                            let detrended = v - (fit.slope * (k + 1) as f64 + fit.intercept);
                            lo = lo.min(detrended);
                            hi = hi.max(detrended);
                        }
                        f += (hi - lo) * (hi - lo);
                    }
                    FluctKind::Dfa => {
                        for (k, &v) in window.iter().enumerate() {
                            let detrended = v - (fit.slope * (k + 1) as f64 + fit.intercept);
                            f += detrended * detrended;
                        }
                    }
                }
            }
            match kind {
                FluctKind::RangeFit => (f / n_windows as f64).sqrt(),
                FluctKind::Dfa => (f / (n_windows * tau) as f64).sqrt(),
            }
        })
        .collect()
}

/// Core fluctuation-analysis routine.
///
/// The series is subsampled with the given stride, cumulatively summed
/// into a profile, and the fluctuation amplitude is measured at each
/// log-spaced window size after per-window linear detrending. The log-log
/// fluctuation curve is then split into two linear regimes at the point
/// minimizing the combined residual norm.
fn fluct_anal(series: &[f64], stride: usize, kind: FluctKind, stat: TwoRegimeStat) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }

    let n = series.len() / stride;
    if n < 2 || series.len() / 2 < MIN_TAU as usize {
        return 0.0;
    }

    // window sizes span up to half the raw length; with a stride of 2 the
    // largest window covers the whole profile in one piece
    let taus = log_spaced_taus(series.len());
    // too few distinct scales to fit two regimes
    if taus.len() < 2 * MIN_REGIME_POINTS {
        return 0.0;
    }

    // cumulative sum over the strided series
    let mut profile = Vec::with_capacity(n);
    let mut acc = series[0];
    profile.push(acc);
    for i in 1..n {
        acc += series[i * stride];
        profile.push(acc);
    }

    let fluct = fluctuation_curve(&profile, &taus, kind);

    let log_tau: Vec<f64> = taus.iter().map(|&t| (t as f64).ln()).collect();
    let log_f: Vec<f64> = fluct.iter().map(|f| f.ln()).collect();
    let ntt = taus.len();

    // residual norm of each candidate split into two linear regimes
    let mut best_split = MIN_REGIME_POINTS;
    let mut best_err = f64::INFINITY;
    for split in MIN_REGIME_POINTS..=(ntt - MIN_REGIME_POINTS) {
        let fit1 = linreg(&log_tau[..split], &log_f[..split]);
        let fit2 = linreg(&log_tau[split - 1..], &log_f[split - 1..]);

        let res1: Vec<f64> = (0..split)
            .map(|j| fit1.slope * log_tau[j] + fit1.intercept - log_f[j])
            .collect();
        let res2: Vec<f64> = (split - 1..ntt)
            .map(|j| fit2.slope * log_tau[j] + fit2.intercept - log_f[j])
            .collect();

        let err = norm(&res1) + norm(&res2);
        if err < best_err {
            best_err = err;
            best_split = split;
        }
    }

    match stat {
        TwoRegimeStat::PropR1 => best_split as f64 / ntt as f64,
        TwoRegimeStat::SlopeStderrR2 => {
            let x2 = &log_tau[best_split - 1..];
            let y2 = &log_f[best_split - 1..];
            let fit2 = linreg(x2, y2);
            slope_stderr(x2, y2, &fit2)
        }
    }
}

/// Proportion of scales in the first regime of a rescaled-range
/// fluctuation curve.
pub fn fluct_anal_rsrangefit_prop_r1(series: &[f64]) -> f64 {
    fluct_anal(series, 1, FluctKind::RangeFit, TwoRegimeStat::PropR1)
}

/// Proportion of scales in the first regime of a lag-2 detrended
/// fluctuation curve.
pub fn fluct_anal_dfa_prop_r1(series: &[f64]) -> f64 {
    fluct_anal(series, 2, FluctKind::Dfa, TwoRegimeStat::PropR1)
}

/// Slope standard error of the second regime of a lag-2 detrended
/// fluctuation curve.
pub fn fluct_anal_dfa_se2(series: &[f64]) -> f64 {
    fluct_anal(series, 2, FluctKind::Dfa, TwoRegimeStat::SlopeStderrR2)
}
