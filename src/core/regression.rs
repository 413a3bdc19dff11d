//! Closed-form ordinary least squares over paired samples.

/// Slope and intercept of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Fits `y = slope * x + intercept` by ordinary least squares.
///
/// The x values are caller-supplied so a fixed support (e.g. `1..=w`) can be
/// reused across sliding windows. When the x values carry no variance the
/// system is singular and the fit degenerates to slope 0, intercept 0; this
/// exact fallback is relied on by callers and pinned by tests.
///
/// Slices of unequal length are truncated to the shorter one.
pub fn linreg(x: &[f64], y: &[f64]) -> LineFit {
    let n = x.len().min(y.len());
    if n == 0 {
        return LineFit {
            slope: f64::NAN,
            intercept: f64::NAN,
        };
    }

    let mut sum_x = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_y = 0.0;
    for i in 0..n {
        sum_x += x[i];
        sum_x2 += x[i] * x[i];
        sum_xy += x[i] * y[i];
        sum_y += y[i];
    }

    let denom = n as f64 * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        // singular system
        return LineFit {
            slope: 0.0,
            intercept: 0.0,
        };
    }

    LineFit {
        slope: (n as f64 * sum_xy - sum_x * sum_y) / denom,
        intercept: (sum_y * sum_x2 - sum_x * sum_xy) / denom,
    }
}

/// Standard error of the fitted slope.
///
/// Uses the residual mean square over n-2 degrees of freedom.
pub fn slope_stderr(x: &[f64], y: &[f64], fit: &LineFit) -> f64 {
    let n = x.len().min(y.len());
    if n < 3 {
        return f64::NAN;
    }

    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let ss_xx: f64 = x[..n].iter().map(|&xi| (xi - mean_x).powi(2)).sum();
    if ss_xx == 0.0 {
        return f64::NAN;
    }

    let ss_res: f64 = x[..n]
        .iter()
        .zip(y[..n].iter())
        .map(|(&xi, &yi)| {
            let pred = fit.slope * xi + fit.intercept;
            (yi - pred).powi(2)
        })
        .sum();

    (ss_res / (n - 2) as f64 / ss_xx).sqrt()
}
