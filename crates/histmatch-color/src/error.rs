//! Error types for histmatch-color

use thiserror::Error;

/// Errors that can occur during color space handling
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] histmatch_core::Error),

    /// Color space identifier outside the supported set
    #[error("unsupported color space: {0:?} (expected rgb, hsl, hsv, xyz, lab or lch)")]
    UnsupportedColorSpace(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
