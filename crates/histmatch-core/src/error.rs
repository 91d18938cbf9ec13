//! Error types for histmatch-core
//!
//! Provides a unified error type for the numeric and buffer primitives.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// histmatch-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Zero-length sample sequence where at least one sample is required
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two sequences that must pair up have different lengths
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Channel count outside {1, 3, 4}
    #[error("unsupported channel count: {0} (expected 1, 3 or 4)")]
    UnsupportedChannelCount(usize),

    /// Buffer length is not a whole number of pixels
    #[error("buffer length {len} is not a multiple of {channels} channels")]
    InvalidBufferLength { len: usize, channels: usize },
}

/// Result type alias for histmatch-core operations
pub type Result<T> = std::result::Result<T, Error>;
