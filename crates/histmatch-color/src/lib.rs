//! histmatch-color - Color space handling for histogram matching
//!
//! This crate provides:
//!
//! - **Color space identifiers** ([`ColorSpace`]): RGB, HSL, HSV, XYZ, LAB, LCH,
//!   each with a static descriptor holding its converter pair and fixed
//!   per-channel scale
//! - **Raw conversions** ([`convert`]): unclamped `f64` RGB <-> space functions
//! - **Output stage** ([`colorspace_to_rgb8`]): round and clamp to 8-bit RGB

pub mod colorspace;
pub mod convert;
pub mod error;

// Re-export core types
pub use histmatch_core;

pub use error::{ColorError, ColorResult};

pub use colorspace::{
    // Types
    ColorSpace,
    ColorSpaceDescriptor,
    // Dispatch
    clamp_u8,
    colorspace_to_rgb,
    colorspace_to_rgb8,
    convert_buffer,
    rgb_to_colorspace,
    rgb_to_u8,
};
