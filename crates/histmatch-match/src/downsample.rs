//! Sample-count bounding for histogram estimation
//!
//! Downsampling only affects which pixels feed the histograms. The learned
//! mappings are always applied to every pixel of the full-resolution source.

use histmatch_color::ColorSpace;
use histmatch_core::{PixelBuffer, pixel_rgb};

/// Stride that keeps the sampled pixel count under `max_mpx` megapixels.
///
/// `ceil((len / channels / 1e6) / max_mpx)` for `max_mpx > 0`, otherwise 1.
/// The result is never below 1.
pub fn downsample_stride(len: usize, channels: usize, max_mpx: f64) -> usize {
    if max_mpx.is_nan() || max_mpx <= 0.0 || channels == 0 {
        return 1;
    }
    let mpx = len as f64 / channels as f64 / 1e6;
    let stride = (mpx / max_mpx).ceil();
    if stride >= 1.0 { stride as usize } else { 1 }
}

/// Raw 0..255 samples of each of the first `channels` channels, taken from
/// every `stride`-th pixel.
pub fn channel_samples(buf: &PixelBuffer<'_>, channels: usize, stride: usize) -> Vec<Vec<f64>> {
    let cap = buf.pixel_count().div_ceil(stride.max(1));
    let mut out: Vec<Vec<f64>> = (0..channels).map(|_| Vec::with_capacity(cap)).collect();
    for pixel in buf.sampled_pixels(stride) {
        for (c, samples) in out.iter_mut().enumerate() {
            samples.push(f64::from(pixel[c]));
        }
    }
    out
}

/// Values of the selected `bands` of `space`, taken from every `stride`-th
/// pixel. Gray pixels are expanded to `[v, v, v]` before conversion.
///
/// The returned vector is indexed like `bands`.
pub fn band_samples(
    buf: &PixelBuffer<'_>,
    space: ColorSpace,
    bands: &[usize],
    stride: usize,
) -> Vec<Vec<f64>> {
    let from_rgb = space.descriptor().from_rgb;
    let cap = buf.pixel_count().div_ceil(stride.max(1));
    let mut out: Vec<Vec<f64>> = (0..bands.len()).map(|_| Vec::with_capacity(cap)).collect();
    for pixel in buf.sampled_pixels(stride) {
        let triplet = from_rgb(pixel_rgb(pixel).map(f64::from));
        for (samples, &band) in out.iter_mut().zip(bands) {
            samples.push(triplet[band]);
        }
    }
    out
}
