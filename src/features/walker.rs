//! Walker simulations: a deterministic particle chases the series under
//! simple dynamics and the walk is compared against its driver.

use crate::core::stats::has_nan;

/// Walker positions under inertial dynamics with the given mass.
///
/// The walker continues along its own momentum and is pulled toward the
/// signal by 1/mass of the gap each step.
fn momentum_walk(series: &[f64], mass: f64) -> Vec<f64> {
    let n = series.len();
    let mut w = Vec::with_capacity(n);
    w.push(series[0]);
    if n > 1 {
        w.push(series[1]);
    }
    for i in 2..n {
        let inertial = w[i - 1] + (w[i - 1] - w[i - 2]);
        w.push(inertial + (series[i] - inertial) / mass);
    }
    w
}

/// Walker positions under asymmetric proportional attraction.
///
/// Moves toward the signal by a fraction of the gap, using `p_up` when
/// the signal is above the walker and `p_down` when it is below.
fn biasprop_walk(series: &[f64], p_up: f64, p_down: f64) -> Vec<f64> {
    let n = series.len();
    let mut w = Vec::with_capacity(n);
    w.push(series[0]);
    for i in 1..n {
        let gap = series[i] - w[i - 1];
        let p = if gap > 0.0 { p_up } else { p_down };
        w.push(w[i - 1] + p * gap);
    }
    w
}

/// Proportion of sign changes in the momentum of an inertial walker with
/// mass 5.
pub fn walker_momentum5_zcross(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 3 {
        return f64::NAN;
    }

    let w = momentum_walk(series, 5.0);
    let momentum: Vec<f64> = w.windows(2).map(|p| p[1] - p[0]).collect();

    let crossings = momentum
        .windows(2)
        .filter(|p| p[0] * p[1] < 0.0)
        .count();
    crossings as f64 / (momentum.len() - 1) as f64
}

/// Mean absolute gap between the series and an asymmetric proportional
/// walker with attraction 0.5 upward and 0.1 downward.
pub fn walker_biasprop_meanabsdiff(series: &[f64]) -> f64 {
    if has_nan(series) || series.len() < 2 {
        return f64::NAN;
    }

    let w = biasprop_walk(series, 0.5, 0.1);
    let total: f64 = series
        .iter()
        .zip(w.iter())
        .map(|(y, wi)| (y - wi).abs())
        .sum();
    total / series.len() as f64
}
