//! Error types used by the crate.

use thiserror::Error;

/// Failures of the distance computation and of its output rendering.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Ellipsoid selector outside `0..=2`.
    #[error("unknown ellipsoid selector: {0} (expected 0, 1 or 2)")]
    UnknownEllipsoid(u8),

    /// One of the computed distances is NaN or infinite.
    #[error("non-finite distance (ellipsoidal = {ellipsoidal}, spherical = {spherical})")]
    NonFinite { ellipsoidal: f64, spherical: f64 },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Rejections produced while validating the raw command-line arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("expected 5 arguments, got {0}")]
    WrongCount(usize),

    #[error("invalid ellipsoid type: {0:?}")]
    Ellipsoid(String),

    #[error("invalid {name}: {value:?}")]
    Latitude { name: &'static str, value: String },

    #[error("invalid {name}: {value:?}")]
    Longitude { name: &'static str, value: String },
}
