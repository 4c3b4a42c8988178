//! Error types for dipkit

use thiserror::Error;

/// Main error type for dipkit operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in image of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Image size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    #[error("Unsupported channel count: expected {expected}, got {actual}")]
    UnsupportedChannels { expected: usize, actual: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Degenerate computation: {0}")]
    Degenerate(String),

    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something unusable: bad shape, bad parameter.
    InvalidArgument,
    /// A denominator would be zero and the operation has no fallback for it.
    DegenerateComputation,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Degenerate(_) => ErrorKind::DegenerateComputation,
            Error::InvalidDimensions { .. }
            | Error::IndexOutOfBounds { .. }
            | Error::SizeMismatch { .. }
            | Error::UnsupportedChannels { .. }
            | Error::InvalidParameter { .. }
            | Error::Other(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type alias for dipkit operations
pub type Result<T> = std::result::Result<T, Error>;
