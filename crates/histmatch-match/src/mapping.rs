//! Per-band tone mappings
//!
//! A [`BandMapping`] is learned from the source and target samples of one
//! band: both are binned over the band's fixed scale, turned into CDFs, and
//! the lookup table is the target's inverse CDF evaluated at the source CDF.

use histmatch_color::{ColorSpace, clamp_u8};
use histmatch_core::{BinRange, Numa, PixelBuffer, bincount, interp, pixel_rgb};

use crate::{MatchError, MatchResult};

/// Learned mapping for one band, with the histograms it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct BandMapping {
    /// 0-indexed band of the color space
    pub band: usize,
    /// Fixed scale used for binning and for the output sample points
    pub range: BinRange,
    /// Normalized source histogram
    pub source_histogram: Numa,
    /// Normalized target histogram
    pub target_histogram: Numa,
    /// Cumulative source distribution
    pub source_cdf: Numa,
    /// Cumulative target distribution
    pub target_cdf: Numa,
    /// Output value for each input bin
    pub lut: Numa,
}

impl BandMapping {
    /// Learn the mapping that reshapes `source` samples to follow `target`.
    ///
    /// The output sample points are `bin_count` evenly spaced values from
    /// `range.min` to `range.max`. A source bin whose CDF has reached the
    /// final target CDF value takes the right clamp of the interpolation, so
    /// it maps to `range.max`.
    ///
    /// # Errors
    ///
    /// - [`MatchError::InvalidParameter`] when `bin_count == 0`
    /// - [`MatchError::Core`] with `EmptyInput` when either sample set is empty
    pub fn build(
        band: usize,
        source: &[f64],
        target: &[f64],
        range: BinRange,
        bin_count: usize,
    ) -> MatchResult<Self> {
        if bin_count == 0 {
            return Err(MatchError::InvalidParameter(
                "bin_count must be >= 1".to_string(),
            ));
        }
        let source_histogram = bincount(source, bin_count, Some(range), true)?;
        let target_histogram = bincount(target, bin_count, Some(range), true)?;
        let source_cdf = source_histogram.cumulative();
        let target_cdf = target_histogram.cumulative();

        let sample_points = Numa::linspace(range.min, range.max, bin_count);
        let mut lut = interp(
            source_cdf.as_slice(),
            target_cdf.as_slice(),
            sample_points.as_slice(),
        )?;
        let (startx, delx) = source_histogram.parameters();
        lut.set_parameters(startx, delx);

        log::trace!(
            "band {} mapping over [{}, {}] with {} bins",
            band,
            range.min,
            range.max,
            bin_count
        );

        Ok(Self {
            band,
            range,
            source_histogram,
            target_histogram,
            source_cdf,
            target_cdf,
            lut,
        })
    }

    /// Number of bins (and LUT entries)
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.lut.len()
    }

    /// Apply-phase bin of `value`:
    /// `floor(clamp((value - min) * (bin_count - 1) / span, 0, bin_count - 1))`.
    ///
    /// A zero span is guarded to 1.
    #[inline]
    pub fn bin_index(&self, value: f64) -> usize {
        let last = self.bin_count().saturating_sub(1);
        let pos = (value - self.range.min) * last as f64 / self.range.guarded_span();
        if pos.is_nan() || pos <= 0.0 {
            0
        } else if pos >= last as f64 {
            last
        } else {
            pos.floor() as usize
        }
    }

    /// Mapped value for `value`
    #[inline]
    pub fn lookup(&self, value: f64) -> f64 {
        self.lut[self.bin_index(value)]
    }

    /// LUT clamped to 8 bits with [`clamp_u8`] (ties to even), for mappings
    /// over the raw 0..255 domain
    pub fn lut_u8(&self) -> Vec<u8> {
        self.lut.iter().map(clamp_u8).collect()
    }
}

/// Normalized histogram of one band of `space` over its fixed scale.
///
/// Useful for charting a matched buffer next to the mapping's source and
/// target histograms.
///
/// # Errors
///
/// - [`MatchError::InvalidBandSelection`] when `band` (0-indexed) is not a
///   color channel of the buffer
/// - [`MatchError::Core`] for an empty buffer or `bin_count == 0`
pub fn band_histogram(
    buf: &PixelBuffer<'_>,
    space: ColorSpace,
    band: usize,
    bin_count: usize,
) -> MatchResult<Numa> {
    let channels = buf.channels().color_channels();
    let range = space
        .scale(band)
        .filter(|_| band < channels)
        .ok_or_else(|| MatchError::InvalidBandSelection {
            bands: vec![band + 1],
            channels,
        })?;
    let from_rgb = space.descriptor().from_rgb;
    let values: Vec<f64> = buf
        .pixels()
        .map(|p| from_rgb(pixel_rgb(p).map(f64::from))[band])
        .collect();
    Ok(bincount(&values, bin_count, Some(range), true)?)
}
