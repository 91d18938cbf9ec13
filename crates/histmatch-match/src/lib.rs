//! histmatch-match - Histogram matching between raster buffers
//!
//! Given a source and a target buffer, learns per-band tone mappings that
//! reshape the source's value distribution to follow the target's, and
//! applies them to every source pixel.
//!
//! - **Entry points** ([`matcher`]): [`match_histograms_rgb`] and
//!   [`match_histograms_colorspaces`]
//! - **Mappings** ([`mapping`]): [`BandMapping`] with its histograms and CDFs
//! - **Downsampling** ([`downsample`]): stride that bounds histogram samples
//! - **Apply phase** ([`apply`]): sequential or rayon-parallel chunked
//!   execution with cooperative cancellation
//! - **Options** ([`options`]): [`MatchOptions`], [`RgbMatchOptions`]
//!
//! # Examples
//!
//! ```
//! use histmatch_core::PixelBuffer;
//! use histmatch_match::{MatchOptions, match_histograms_colorspaces};
//! use histmatch_color::ColorSpace;
//!
//! let source = [0u8, 0, 0, 255, 255, 255, 255, 255];
//! let target = [255u8, 255, 255, 255, 0, 0, 0, 255];
//! let src = PixelBuffer::new(&source, 4).unwrap();
//! let tgt = PixelBuffer::new(&target, 4).unwrap();
//!
//! let options = MatchOptions::default().with_color_space(ColorSpace::Rgb);
//! let out = match_histograms_colorspaces(&src, &tgt, &options).unwrap();
//! assert_eq!(out.matched.as_deref(), Some(&source[..]));
//! ```

pub mod apply;
pub mod downsample;
pub mod error;
pub mod mapping;
pub mod matcher;
pub mod options;

// Re-export lower crates
pub use histmatch_color;
pub use histmatch_core;

pub use error::{MatchError, MatchResult};

pub use apply::apply_pixels;
pub use downsample::{band_samples, channel_samples, downsample_stride};
pub use mapping::{BandMapping, band_histogram};
pub use matcher::{MatchOutput, match_histograms_colorspaces, match_histograms_rgb};
pub use options::{
    CancelToken, DEFAULT_CHUNK_PIXELS, Execution, ExecutionStrategy, MatchOptions, ReturnType,
    RgbMatchOptions,
};
