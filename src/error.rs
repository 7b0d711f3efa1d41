//! Error types
//!
//! Only construction and configuration can fail. A tick never does.

use thiserror::Error;

/// What exactly was wrong with a set of obstacle arrays
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryFault {
    #[error("length mismatch: {centers} centers, {radiuses} radiuses, {weights} weights")]
    LengthMismatch {
        centers: usize,
        radiuses: usize,
        weights: usize,
    },

    #[error("radius at index {index} must be positive, got {value}")]
    NonPositiveRadius { index: usize, value: f32 },

    #[error("weight at index {index} must be positive, got {value}")]
    NonPositiveWeight { index: usize, value: f32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid obstacle geometry: {0}")]
    InvalidGeometry(#[from] GeometryFault),

    #[error("invalid arena size {width}x{height}: both sides must be finite and positive")]
    InvalidArena { width: f32, height: f32 },

    #[error("repulsion scale must be finite and positive, got {0}")]
    InvalidRepulsionScale(f32),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for all fallible operations
pub type Result<T> = std::result::Result<T, Error>;
