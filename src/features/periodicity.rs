//! Spline-detrended periodicity detection on the autocorrelation
//! function.

use crate::core::stats::has_nan;

/// Least-squares cubic spline with one interior knot at the midpoint,
/// evaluated at every sample position.
///
/// The fit uses the truncated-power basis {1, t, t^2, t^3, (t-k)^3+} on a
/// support scaled to [0, 1], which spans exactly the C2-continuous
/// two-piece cubics. The normal equations are solved by Gaussian
/// elimination with partial pivoting.
fn spline_detrend_curve(series: &[f64]) -> Option<Vec<f64>> {
    let n = series.len();
    if n < 6 {
        return None;
    }

    let knot = ((n - 1) / 2) as f64 / (n - 1) as f64;
    let basis = |t: f64| -> [f64; 5] {
        let excess = t - knot;
        [
            1.0,
            t,
            t * t,
            t * t * t,
            if excess > 0.0 { excess.powi(3) } else { 0.0 },
        ]
    };

    // accumulate the normal equations B'B beta = B'y
    let mut btb = [[0.0f64; 5]; 5];
    let mut bty = [0.0f64; 5];
    for (i, &y) in series.iter().enumerate() {
        let t = i as f64 / (n - 1) as f64;
        let row = basis(t);
        for a in 0..5 {
            for b in 0..5 {
                btb[a][b] += row[a] * row[b];
            }
            bty[a] += row[a] * y;
        }
    }

    let beta = solve_linear_system(&mut btb, &mut bty)?;

    Some(
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                let row = basis(t);
                (0..5).map(|a| beta[a] * row[a]).sum()
            })
            .collect(),
    )
}

/// Gaussian elimination with partial pivoting on a 5x5 system.
fn solve_linear_system(a: &mut [[f64; 5]; 5], b: &mut [f64; 5]) -> Option<[f64; 5]> {
    let n = 5;
    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; 5];
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in i + 1..n {
            sum -= a[i][j] * x[j];
        }
        x[i] = sum / a[i][i];
    }
    Some(x)
}

/// Periodicity estimate from the detrended autocorrelation function.
///
/// After removing a cubic-spline trend, scans the raw autocovariance
/// curve over lags up to n/3 for the first peak that (a) follows a
/// trough, (b) rises at least 0.01 above it, and (c) is itself positive.
/// Returns the position of that peak on the curve, or 1 when no peak
/// qualifies.
pub fn periodicity_wang_th001(series: &[f64]) -> f64 {
    if has_nan(series) {
        return f64::NAN;
    }

    let n = series.len();
    let trend = match spline_detrend_curve(series) {
        Some(t) => t,
        None => return f64::NAN,
    };
    let detrended: Vec<f64> = series.iter().zip(trend.iter()).map(|(y, s)| y - s).collect();

    // unnormalized autocovariance is enough for peak finding
    let ac_max = (n as f64 / 3.0).ceil() as usize;
    let acf: Vec<f64> = (1..=ac_max)
        .map(|tau| {
            (0..n - tau)
                .map(|i| detrended[i] * detrended[i + tau])
                .sum::<f64>()
        })
        .collect();

    let mut troughs = Vec::new();
    let mut peaks = Vec::new();
    for i in 1..ac_max.saturating_sub(1) {
        let slope_in = acf[i] - acf[i - 1];
        let slope_out = acf[i + 1] - acf[i];
        if slope_in < 0.0 && slope_out > 0.0 {
            troughs.push(i);
        } else if slope_in > 0.0 && slope_out < 0.0 {
            peaks.push(i);
        }
    }

    const THRESHOLD: f64 = 0.01;
    for &i_peak in &peaks {
        let preceding = troughs.iter().rev().find(|&&t| t < i_peak);
        let i_trough = match preceding {
            Some(&t) => t,
            None => continue,
        };

        if acf[i_peak] - acf[i_trough] < THRESHOLD {
            continue;
        }
        if acf[i_peak] < 0.0 {
            continue;
        }
        return i_peak as f64;
    }
    1.0
}
