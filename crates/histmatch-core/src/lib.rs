//! histmatch-core - Numeric and buffer primitives for histogram matching
//!
//! This crate provides the building blocks used by the matching engine:
//!
//! - [`Numa`] - Numeric array used for histograms, CDFs and lookup tables
//! - [`bincount`] - Fixed-width histogram over a sample sequence
//! - [`cumsum`] - Running total of a sequence
//! - [`interp`] - Piecewise-linear interpolation with domain clamping
//! - [`PixelBuffer`] - Validated view over an interleaved 8-bit buffer

pub mod buffer;
pub mod error;
pub mod numa;

pub use buffer::{ALPHA, ChannelCount, PixelBuffer, pixel_rgb};
pub use error::{Error, Result};
pub use numa::{BinRange, Numa, bincount, cumsum, interp};
