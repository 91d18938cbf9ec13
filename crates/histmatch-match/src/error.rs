//! Error types for histmatch-match

use thiserror::Error;

/// Errors that can occur while building or applying a histogram match
///
/// Every failure aborts the whole call: no mapping and no matched buffer
/// are returned alongside an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Core library error (empty input, malformed buffer, ...)
    #[error("core error: {0}")]
    Core(#[from] histmatch_core::Error),

    /// Color space error
    #[error("color error: {0}")]
    Color(#[from] histmatch_color::ColorError),

    /// No requested band survives filtering against the channel count
    #[error("invalid band selection {bands:?} for {channels} color channel(s)")]
    InvalidBandSelection { bands: Vec<usize>, channels: usize },

    /// Source and target disagree on their color channels
    #[error(
        "channel count mismatch: source has {source_channels} color channel(s), target has {target_channels}"
    )]
    ChannelCountMismatch {
        source_channels: usize,
        target_channels: usize,
    },

    /// The cancel token fired during the apply phase
    #[error("histogram matching cancelled")]
    Cancelled,

    /// Invalid option value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for matching operations
pub type MatchResult<T> = Result<T, MatchError>;
