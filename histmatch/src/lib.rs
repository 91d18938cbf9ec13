//! histmatch - Histogram matching for raster images
//!
//! Reshapes the per-channel (or per-band, in a chosen color space) value
//! distribution of a source image to follow a target image, and applies the
//! learned tone mapping to every source pixel at full resolution.
//!
//! # Overview
//!
//! - Fixed-width histograms, cumulative sums and clamped linear
//!   interpolation ([`bincount`], [`cumsum`], [`interp`])
//! - RGB <-> HSL, HSV, XYZ, LAB, LCH conversion with fixed scales
//!   ([`color`])
//! - Downsampled histogram estimation, sequential or parallel apply phase
//!   with cooperative cancellation ([`matching`])
//!
//! The engine performs no I/O: it consumes flat interleaved 8-bit buffers
//! and returns a new buffer plus per-band diagnostic histograms.
//!
//! # Example
//!
//! ```
//! use histmatch::{MatchOptions, PixelBuffer, ReturnType, match_histograms_colorspaces};
//! use histmatch::color::ColorSpace;
//!
//! let source = [10u8, 10, 10, 200, 200, 200];
//! let target = [60u8, 60, 60, 90, 90, 90];
//! let options = MatchOptions::default()
//!     .with_color_space(ColorSpace::Lab)
//!     .with_bands(&[1])
//!     .with_return_type(ReturnType::Mapping);
//!
//! let out = match_histograms_colorspaces(
//!     &PixelBuffer::new(&source, 3).unwrap(),
//!     &PixelBuffer::new(&target, 3).unwrap(),
//!     &options,
//! )
//! .unwrap();
//! assert!(out.mappings[0].is_some());
//! assert!(out.matched.is_none());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use histmatch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use histmatch_color as color;
pub use histmatch_match as matching;

// Entry points and their option types at the top level
pub use histmatch_match::{
    BandMapping, CancelToken, ExecutionStrategy, MatchError, MatchOptions, MatchOutput,
    MatchResult, ReturnType, RgbMatchOptions, match_histograms_colorspaces, match_histograms_rgb,
};
