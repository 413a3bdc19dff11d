//! # anofox-features
//!
//! Scalar feature extraction for univariate time series.
//!
//! Computes a fixed catalog of summary statistics ("features") used for
//! feature-based time-series classification and clustering. Each feature
//! is an independent pure function from a series to one `f64`; NaN is the
//! sole failure marker (NaN in the input, insufficient length, or a
//! numerically undefined statistic).
//!
//! The heavy lifting lives in a small core: autocorrelation scans,
//! z-scoring, closed-form regression, Gaussian automutual information,
//! and local-forecast residual analysis. Catalog entries are thin
//! compositions of those engines.
//!
//! # Example
//!
//! ```
//! use anofox_features::catalog::{compute, compute_all};
//!
//! let series: Vec<f64> = (0..200)
//!     .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 20.0).sin())
//!     .collect();
//!
//! // one feature by canonical name
//! let tau = compute("CO_f1ecac", &series).unwrap();
//! assert!(tau > 0.0);
//!
//! // or the whole catalog at once
//! let all = compute_all(&series).unwrap();
//! assert!(all.len() > 30);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod catalog;
pub mod core;
pub mod error;
pub mod features;

pub use error::{FeatureError, Result};

pub mod prelude {
    pub use crate::catalog::{catalog, compute, compute_all, FeatureDef};
    pub use crate::core::stats::zscore;
    pub use crate::error::{FeatureError, Result};
}
