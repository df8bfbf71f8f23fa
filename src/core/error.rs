//! Error types for dataset splitting

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Invalid test ratio: {0} (must be between 0.0 and 1.0)")]
    InvalidRatio(f64),

    #[error("Label count mismatch: dataset has {points} points, got {labels} labels")]
    LabelCountMismatch { points: usize, labels: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, SplitError>;
