//! Color space identifiers, scale tables and conversion dispatch
//!
//! Each [`ColorSpace`] maps to a static [`ColorSpaceDescriptor`] holding
//! its converter pair and the fixed `(min, max)` scale of each channel.
//! The scales are conventions, not true gamut bounds: highly saturated
//! colors can fall outside the LAB a/b or LCH chroma ranges, in which case
//! binning clamps them into the first or last bin.

use std::fmt;
use std::str::FromStr;

use histmatch_core::{BinRange, PixelBuffer, pixel_rgb};

use crate::convert;
use crate::{ColorError, ColorResult};

/// Supported color spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSpace {
    /// sRGB, 0..255 per channel
    #[default]
    Rgb,
    /// Hue / saturation / lightness
    Hsl,
    /// Hue / saturation / value
    Hsv,
    /// CIE XYZ, D65
    Xyz,
    /// CIE L*a*b*
    Lab,
    /// Cylindrical L*a*b* (lightness / chroma / hue)
    Lch,
}

/// Converter pair plus per-channel scale for one color space
#[derive(Debug, Clone, Copy)]
pub struct ColorSpaceDescriptor {
    /// Space this descriptor belongs to
    pub space: ColorSpace,
    /// Lower-case identifier
    pub name: &'static str,
    /// Fixed `(min, max)` per channel
    pub scales: [BinRange; 3],
    /// Raw RGB (0..255) to this space
    pub from_rgb: fn([f64; 3]) -> [f64; 3],
    /// Raw this space to RGB (0..255, unclamped)
    pub to_rgb: fn([f64; 3]) -> [f64; 3],
}

const fn scale(min: f64, max: f64) -> BinRange {
    BinRange { min, max }
}

fn identity(v: [f64; 3]) -> [f64; 3] {
    v
}

static RGB: ColorSpaceDescriptor = ColorSpaceDescriptor {
    space: ColorSpace::Rgb,
    name: "rgb",
    scales: [scale(0.0, 255.0), scale(0.0, 255.0), scale(0.0, 255.0)],
    from_rgb: identity,
    to_rgb: identity,
};

static HSL: ColorSpaceDescriptor = ColorSpaceDescriptor {
    space: ColorSpace::Hsl,
    name: "hsl",
    scales: [scale(0.0, 360.0), scale(0.0, 100.0), scale(0.0, 100.0)],
    from_rgb: convert::rgb_to_hsl,
    to_rgb: convert::hsl_to_rgb,
};

static HSV: ColorSpaceDescriptor = ColorSpaceDescriptor {
    space: ColorSpace::Hsv,
    name: "hsv",
    scales: [scale(0.0, 360.0), scale(0.0, 100.0), scale(0.0, 100.0)],
    from_rgb: convert::rgb_to_hsv,
    to_rgb: convert::hsv_to_rgb,
};

static XYZ: ColorSpaceDescriptor = ColorSpaceDescriptor {
    space: ColorSpace::Xyz,
    name: "xyz",
    scales: [scale(0.0, 95.047), scale(0.0, 100.0), scale(0.0, 108.883)],
    from_rgb: convert::rgb_to_xyz,
    to_rgb: convert::xyz_to_rgb,
};

static LAB: ColorSpaceDescriptor = ColorSpaceDescriptor {
    space: ColorSpace::Lab,
    name: "lab",
    scales: [scale(0.0, 100.0), scale(-127.0, 127.0), scale(-127.0, 127.0)],
    from_rgb: convert::rgb_to_lab,
    to_rgb: convert::lab_to_rgb,
};

static LCH: ColorSpaceDescriptor = ColorSpaceDescriptor {
    space: ColorSpace::Lch,
    name: "lch",
    scales: [scale(0.0, 100.0), scale(0.0, 131.0), scale(0.0, 360.0)],
    from_rgb: convert::rgb_to_lch,
    to_rgb: convert::lch_to_rgb,
};

impl ColorSpace {
    /// Every supported space, in table order
    pub const ALL: [ColorSpace; 6] = [
        ColorSpace::Rgb,
        ColorSpace::Hsl,
        ColorSpace::Hsv,
        ColorSpace::Xyz,
        ColorSpace::Lab,
        ColorSpace::Lch,
    ];

    /// Static descriptor for this space
    pub fn descriptor(self) -> &'static ColorSpaceDescriptor {
        match self {
            ColorSpace::Rgb => &RGB,
            ColorSpace::Hsl => &HSL,
            ColorSpace::Hsv => &HSV,
            ColorSpace::Xyz => &XYZ,
            ColorSpace::Lab => &LAB,
            ColorSpace::Lch => &LCH,
        }
    }

    /// Lower-case identifier (`"rgb"`, `"lab"`, ...)
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Fixed `(min, max)` scale of each channel
    pub fn scales(self) -> [BinRange; 3] {
        self.descriptor().scales
    }

    /// Fixed `(min, max)` scale of channel `band` (0-indexed)
    pub fn scale(self, band: usize) -> Option<BinRange> {
        self.descriptor().scales.get(band).copied()
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        let wanted = s.trim();
        ColorSpace::ALL
            .into_iter()
            .find(|cs| cs.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ColorError::UnsupportedColorSpace(s.to_string()))
    }
}

/// Convert a raw RGB triplet (0..255) into `space`, without clamping.
#[inline]
pub fn rgb_to_colorspace(rgb: [f64; 3], space: ColorSpace) -> [f64; 3] {
    (space.descriptor().from_rgb)(rgb)
}

/// Convert a triplet in `space` back to raw RGB (0..255 scale, unclamped).
#[inline]
pub fn colorspace_to_rgb(triplet: [f64; 3], space: ColorSpace) -> [f64; 3] {
    (space.descriptor().to_rgb)(triplet)
}

/// Clamp a sample to `[0, 255]` and round it, ties to even.
///
/// This is how a clamped 8-bit store behaves: `0.5 -> 0`, `1.5 -> 2`,
/// `NaN -> 0`.
#[inline]
pub fn clamp_u8(v: f64) -> u8 {
    if v.is_nan() {
        0
    } else {
        v.clamp(0.0, 255.0).round_ties_even() as u8
    }
}

/// Round a raw RGB triplet with [`clamp_u8`].
#[inline]
pub fn rgb_to_u8(rgb: [f64; 3]) -> [u8; 3] {
    rgb.map(clamp_u8)
}

/// Convert a triplet in `space` to displayable 8-bit RGB.
#[inline]
pub fn colorspace_to_rgb8(triplet: [f64; 3], space: ColorSpace) -> [u8; 3] {
    rgb_to_u8(colorspace_to_rgb(triplet, space))
}

/// Convert every pixel of an interleaved buffer into `space`.
///
/// Gray pixels are expanded to `[v, v, v]`; alpha is ignored.
///
/// # Errors
///
/// Propagates buffer validation failures from [`PixelBuffer::new`].
pub fn convert_buffer(data: &[u8], channels: usize, space: ColorSpace) -> ColorResult<Vec<[f64; 3]>> {
    let buf = PixelBuffer::new(data, channels)?;
    let from_rgb = space.descriptor().from_rgb;
    Ok(buf
        .pixels()
        .map(|p| from_rgb(pixel_rgb(p).map(f64::from)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("LAB".parse::<ColorSpace>().unwrap(), ColorSpace::Lab);
        assert_eq!(" hsv ".parse::<ColorSpace>().unwrap(), ColorSpace::Hsv);
        assert_eq!(
            "cmyk".parse::<ColorSpace>(),
            Err(ColorError::UnsupportedColorSpace("cmyk".to_string()))
        );
        for cs in ColorSpace::ALL {
            assert_eq!(cs.to_string().parse::<ColorSpace>().unwrap(), cs);
        }
    }

    #[test]
    fn test_descriptor_matches_space() {
        for cs in ColorSpace::ALL {
            assert_eq!(cs.descriptor().space, cs);
            for range in cs.scales() {
                assert!(range.min < range.max);
            }
        }
    }

    #[test]
    fn test_scale_table() {
        assert_eq!(ColorSpace::Xyz.scale(2), Some(BinRange::new(0.0, 108.883)));
        assert_eq!(ColorSpace::Lab.scale(1), Some(BinRange::new(-127.0, 127.0)));
        assert_eq!(ColorSpace::Lch.scale(1), Some(BinRange::new(0.0, 131.0)));
        assert_eq!(ColorSpace::Rgb.scale(3), None);
    }

    #[test]
    fn test_rgb_to_u8_rounds_and_clamps() {
        assert_eq!(rgb_to_u8([-3.2, 127.5, 300.0]), [0, 128, 255]);
        assert_eq!(rgb_to_u8([f64::NAN, 0.49, 254.51]), [0, 0, 255]);
    }

    #[test]
    fn test_clamp_u8_ties_to_even() {
        assert_eq!(clamp_u8(0.5), 0);
        assert_eq!(clamp_u8(1.5), 2);
        assert_eq!(clamp_u8(126.5), 126);
        assert_eq!(clamp_u8(254.5), 254);
        assert_eq!(clamp_u8(255.5), 255);
        assert_eq!(clamp_u8(-0.5), 0);
    }

    #[test]
    fn test_gray_roundtrip_all_spaces() {
        for cs in ColorSpace::ALL {
            for v in [0u8, 1, 17, 128, 200, 254, 255] {
                let rgb = [v as f64; 3];
                let back = colorspace_to_rgb8(rgb_to_colorspace(rgb, cs), cs);
                for c in back {
                    assert!((c as i16 - v as i16).abs() <= 1, "{cs} {v} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_convert_buffer() {
        let px = convert_buffer(&[255u8, 0, 0, 9, 0, 0, 255, 9], 4, ColorSpace::Hsv).unwrap();
        assert_eq!(px.len(), 2);
        assert_eq!(px[1][0], 240.0);
        assert!(convert_buffer(&[1u8, 2], 3, ColorSpace::Rgb).is_err());
    }
}
