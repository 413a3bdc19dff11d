//! Error types for the anofox-features library.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors that can occur at the catalog boundary.
///
/// Feature computations themselves never error: numerical failure inside a
/// feature is signalled by returning `f64::NAN`. These variants cover the
/// dispatch layer only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// Input data is empty.
    #[error("empty input series")]
    EmptyInput,

    /// The requested feature name is not in the catalog.
    #[error("unknown feature: {0}")]
    UnknownFeature(String),
}
