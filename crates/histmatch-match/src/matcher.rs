//! Histogram matching entry points
//!
//! Two modes share the mapping construction in [`BandMapping::build`]:
//!
//! 1. **Simple RGB** ([`match_histograms_rgb`]): each leading color channel
//!    is matched in its raw 0..255 domain with 256 bins.
//! 2. **Color space** ([`match_histograms_colorspaces`]): pixels are
//!    converted into a [`ColorSpace`](histmatch_color::ColorSpace), selected
//!    bands are matched over the space's fixed scales, and pixels are
//!    converted back to RGB.
//!
//! Both are stateless. Alpha, when present, is copied verbatim.

use histmatch_color::{colorspace_to_rgb8, rgb_to_colorspace};
use histmatch_core::{ALPHA, BinRange, PixelBuffer, pixel_rgb};

use crate::apply::apply_pixels;
use crate::downsample::{band_samples, channel_samples, downsample_stride};
use crate::mapping::BandMapping;
use crate::options::{MatchOptions, ReturnType, RgbMatchOptions};
use crate::{MatchError, MatchResult};

/// Domain of the simple RGB mode
const RGB_RANGE: BinRange = BinRange {
    min: 0.0,
    max: 255.0,
};

/// Bins of the simple RGB mode
const RGB_BINS: usize = 256;

/// Result of a matching call
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchOutput {
    /// Mapping per band of the color space; `None` for bands not matched
    pub mappings: [Option<BandMapping>; 3],
    /// Remapped source, present when [`ReturnType::Matched`] was requested
    pub matched: Option<Vec<u8>>,
}

impl MatchOutput {
    /// Iterate over the bands that carry a mapping
    pub fn band_mappings(&self) -> impl Iterator<Item = &BandMapping> {
        self.mappings.iter().flatten()
    }
}

/// Check that source and target agree on their color channels.
fn check_compatible(source: &PixelBuffer<'_>, target: &PixelBuffer<'_>) -> MatchResult<usize> {
    let sc = source.channels().color_channels();
    let tc = target.channels().color_channels();
    if sc != tc {
        return Err(MatchError::ChannelCountMismatch {
            source_channels: sc,
            target_channels: tc,
        });
    }
    Ok(sc)
}

/// Match each leading color channel of `source` to `target` in the raw
/// 0..255 domain.
///
/// Gray buffers match their single channel; RGB and RGBA buffers match
/// channels 0..3. Each mapping is `interp(source_cdf, target_cdf, [0..=255])`
/// and is applied as `out[c] = clamp_u8(mapping[c][src[c]])` (ties to even).
///
/// # Errors
///
/// - [`MatchError::ChannelCountMismatch`] if one buffer is gray and the other is not
/// - [`MatchError::Core`] with `EmptyInput` if either buffer has no pixels
/// - [`MatchError::Cancelled`] if the cancel token fires during the apply phase
pub fn match_histograms_rgb(
    source: &PixelBuffer<'_>,
    target: &PixelBuffer<'_>,
    options: &RgbMatchOptions,
) -> MatchResult<MatchOutput> {
    let channels = check_compatible(source, target)?;
    let src_stride = downsample_stride(source.len(), source.channels().get(), options.max_mpx);
    let tgt_stride = downsample_stride(target.len(), target.channels().get(), options.max_mpx);
    log::debug!(
        "rgb match: {} channel(s), strides {}/{}, {:?}",
        channels,
        src_stride,
        tgt_stride,
        options.return_type
    );

    let src_samples = channel_samples(source, channels, src_stride);
    let tgt_samples = channel_samples(target, channels, tgt_stride);

    let mut output = MatchOutput::default();
    for (c, (s, t)) in src_samples.iter().zip(&tgt_samples).enumerate() {
        output.mappings[c] = Some(BandMapping::build(c, s, t, RGB_RANGE, RGB_BINS)?);
    }

    if options.return_type == ReturnType::Mapping {
        return Ok(output);
    }

    let luts: Vec<Vec<u8>> = output.band_mappings().map(BandMapping::lut_u8).collect();
    log::debug!("rgb apply: {:?}", options.execution.strategy);
    let matched = apply_pixels(source, &options.execution, |src, dst| {
        dst.copy_from_slice(src);
        for (d, lut) in dst.iter_mut().zip(&luts) {
            *d = lut[usize::from(*d)];
        }
    })?;
    output.matched = Some(matched);
    Ok(output)
}

/// Match selected bands of a color space between `source` and `target`.
///
/// Steps:
/// 1. Resolve 1-indexed `options.bands` to 0-indexed color channels
/// 2. Sample both buffers (every `stride`-th pixel) and convert to the space
/// 3. Build a [`BandMapping`] per selected band over the space's fixed scale
/// 4. Unless only mappings were requested, convert every source pixel,
///    replace each selected band with its LUT value, convert back to RGB,
///    clamp to `[0, 255]` and round ties to even
///
/// Gray buffers are expanded to `[v, v, v]`; the first channel of the
/// converted-back triplet is written.
///
/// # Errors
///
/// - [`MatchError::InvalidParameter`] if `bin_count == 0`
/// - [`MatchError::InvalidBandSelection`] if no band survives filtering
/// - [`MatchError::ChannelCountMismatch`] if one buffer is gray and the other is not
/// - [`MatchError::Core`] with `EmptyInput` if either buffer has no pixels
/// - [`MatchError::Cancelled`] if the cancel token fires during the apply phase
pub fn match_histograms_colorspaces(
    source: &PixelBuffer<'_>,
    target: &PixelBuffer<'_>,
    options: &MatchOptions,
) -> MatchResult<MatchOutput> {
    if options.bin_count == 0 {
        return Err(MatchError::InvalidParameter(
            "bin_count must be >= 1".to_string(),
        ));
    }
    let channels = check_compatible(source, target)?;
    let bands = options.resolve_bands(channels)?;
    let space = options.color_space;
    let scales = space.scales();

    let src_stride = downsample_stride(source.len(), source.channels().get(), options.max_mpx);
    let tgt_stride = downsample_stride(target.len(), target.channels().get(), options.max_mpx);
    log::debug!(
        "{} match: bands {:?}, {} bins, strides {}/{}, {:?}",
        space,
        bands,
        options.bin_count,
        src_stride,
        tgt_stride,
        options.return_type
    );

    let src_samples = band_samples(source, space, &bands, src_stride);
    let tgt_samples = band_samples(target, space, &bands, tgt_stride);

    let mut output = MatchOutput::default();
    for ((&band, s), t) in bands.iter().zip(&src_samples).zip(&tgt_samples) {
        output.mappings[band] = Some(BandMapping::build(
            band,
            s,
            t,
            scales[band],
            options.bin_count,
        )?);
    }

    if options.return_type == ReturnType::Mapping {
        return Ok(output);
    }

    let selected: Vec<&BandMapping> = output.band_mappings().collect();
    let has_alpha = source.channels().has_alpha();
    log::debug!("{} apply: {:?}", space, options.execution.strategy);
    let matched = apply_pixels(source, &options.execution, |src, dst| {
        let mut triplet = rgb_to_colorspace(pixel_rgb(src).map(f64::from), space);
        for m in &selected {
            triplet[m.band] = m.lookup(triplet[m.band]);
        }
        let rgb = colorspace_to_rgb8(triplet, space);
        let n = dst.len().min(3);
        dst[..n].copy_from_slice(&rgb[..n]);
        if has_alpha {
            dst[ALPHA] = src[ALPHA];
        }
    })?;
    output.matched = Some(matched);
    Ok(output)
}
