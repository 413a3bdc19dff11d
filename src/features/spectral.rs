//! Spectral summary features over a rectangular-window Welch power
//! spectrum.

use crate::core::stats::{cumsum, has_nan};
use rustfft::{num_complex::Complex64, FftPlanner};

/// One-sided Welch power spectrum with a rectangular window spanning the
/// whole series.
///
/// The single segment is zero-padded to the next power of two; interior
/// bins are doubled to fold the negative frequencies in. Returns the
/// power values and their frequencies in cycles per sample.
fn welch_rect(series: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = series.len();
    let nfft = n.next_power_of_two();

    let mut buffer: Vec<Complex64> = series
        .iter()
        .map(|&x| Complex64::new(x, 0.0))
        .chain(std::iter::repeat(Complex64::new(0.0, 0.0)))
        .take(nfft)
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(nfft);
    fft.process(&mut buffer);

    // rectangular window: normalization is the window energy, n
    let scale = n as f64;
    let n_out = nfft / 2 + 1;

    let mut power = Vec::with_capacity(n_out);
    let mut freq = Vec::with_capacity(n_out);
    for (i, c) in buffer.iter().take(n_out).enumerate() {
        let mut p = (c.re * c.re + c.im * c.im) / scale;
        if i > 0 && i < n_out - 1 {
            p *= 2.0;
        }
        power.push(p);
        freq.push(i as f64 / nfft as f64);
    }
    (power, freq)
}

/// Shared setup for the spectral summaries: angular frequencies and the
/// spectral density on that axis.
fn angular_spectrum(series: &[f64]) -> Option<(Vec<f64>, Vec<f64>)> {
    let (power, freq) = welch_rect(series);
    if power.len() < 2 {
        return None;
    }

    let two_pi = 2.0 * std::f64::consts::PI;
    let w: Vec<f64> = freq.iter().map(|f| two_pi * f).collect();
    let s: Vec<f64> = power.iter().map(|p| p / two_pi).collect();
    if s.iter().any(|x| x.is_infinite()) {
        return None;
    }
    Some((s, w))
}

/// Power in the lowest fifth of the frequency range, integrated over
/// angular frequency.
pub fn welch_rect_area_5_1(series: &[f64]) -> f64 {
    if has_nan(series) || series.is_empty() {
        return f64::NAN;
    }
    let (s, w) = match angular_spectrum(series) {
        Some(sw) => sw,
        None => return 0.0,
    };

    let dw = w[1] - w[0];
    let limit = s.len() / 5;
    s[..limit].iter().sum::<f64>() * dw
}

/// Angular frequency at which the cumulative spectral power first exceeds
/// half the total.
pub fn welch_rect_centroid(series: &[f64]) -> f64 {
    if has_nan(series) || series.is_empty() {
        return f64::NAN;
    }
    let (s, w) = match angular_spectrum(series) {
        Some(sw) => sw,
        None => return 0.0,
    };

    let cs = cumsum(&s);
    let half = cs[cs.len() - 1] * 0.5;
    for (i, &c) in cs.iter().enumerate() {
        if c > half {
            return w[i];
        }
    }
    0.0
}
