//! Interleaved 8-bit pixel buffers
//!
//! A [`PixelBuffer`] is a borrowed, validated view over a flat
//! `R,G,B[,A]` (or gray) sample sequence. The engine never mutates the
//! caller's buffer; every operation that produces pixels allocates its own
//! output of the same length.

use crate::error::{Error, Result};

/// Index of the alpha channel in 4-channel buffers
pub const ALPHA: usize = 3;

/// Number of interleaved channels in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelCount {
    /// Single gray channel
    Gray,
    /// R, G, B
    Rgb,
    /// R, G, B, A (alpha is never matched)
    Rgba,
}

impl ChannelCount {
    /// Parse a raw channel count
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedChannelCount`] for anything other than 1, 3 or 4.
    pub fn from_usize(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(Error::UnsupportedChannelCount(other)),
        }
    }

    /// Number of samples per pixel
    #[inline]
    pub fn get(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Number of leading color channels eligible for matching
    #[inline]
    pub fn color_channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb | Self::Rgba => 3,
        }
    }

    /// Whether the last channel is alpha
    #[inline]
    pub fn has_alpha(self) -> bool {
        self == Self::Rgba
    }
}

/// Borrowed view of an interleaved pixel buffer
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    channels: ChannelCount,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as a buffer with `channels` samples per pixel.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedChannelCount`] if `channels` is not 1, 3 or 4
    /// - [`Error::InvalidBufferLength`] if `data.len()` is not a multiple
    ///   of `channels`
    pub fn new(data: &'a [u8], channels: usize) -> Result<Self> {
        let channels = ChannelCount::from_usize(channels)?;
        if data.len() % channels.get() != 0 {
            return Err(Error::InvalidBufferLength {
                len: data.len(),
                channels: channels.get(),
            });
        }
        Ok(Self { data, channels })
    }

    /// Raw interleaved samples
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Channel layout
    #[inline]
    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    /// Total number of samples (`pixel_count * channels`)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / self.channels.get()
    }

    /// Iterate over pixels as slices of `channels` samples
    pub fn pixels(&self) -> std::slice::ChunksExact<'a, u8> {
        self.data.chunks_exact(self.channels.get())
    }

    /// Iterate over every `stride`-th pixel, starting with the first.
    ///
    /// A stride of 0 is treated as 1.
    pub fn sampled_pixels(&self, stride: usize) -> std::iter::StepBy<std::slice::ChunksExact<'a, u8>> {
        self.pixels().step_by(stride.max(1))
    }
}

/// Expand a pixel into an RGB triplet; gray pixels become `[v, v, v]`.
#[inline]
pub fn pixel_rgb(pixel: &[u8]) -> [u8; 3] {
    match pixel {
        [v] => [*v, *v, *v],
        [r, g, b, ..] => [*r, *g, *b],
        _ => [0, 0, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count_parse() {
        assert_eq!(ChannelCount::from_usize(4).unwrap(), ChannelCount::Rgba);
        assert_eq!(
            ChannelCount::from_usize(2),
            Err(Error::UnsupportedChannelCount(2))
        );
        assert_eq!(ChannelCount::Gray.color_channels(), 1);
        assert!(ChannelCount::Rgba.has_alpha());
    }

    #[test]
    fn test_buffer_length_validation() {
        let data = [0u8; 7];
        assert_eq!(
            PixelBuffer::new(&data, 3).unwrap_err(),
            Error::InvalidBufferLength { len: 7, channels: 3 }
        );
        let buf = PixelBuffer::new(&data[..6], 3).unwrap();
        assert_eq!(buf.pixel_count(), 2);
    }

    #[test]
    fn test_sampled_pixels_stride() {
        let data: Vec<u8> = (0..10).collect();
        let buf = PixelBuffer::new(&data, 1).unwrap();
        let picked: Vec<u8> = buf.sampled_pixels(3).map(|p| p[0]).collect();
        assert_eq!(picked, vec![0, 3, 6, 9]);
        assert_eq!(buf.sampled_pixels(0).count(), 10);
    }

    #[test]
    fn test_pixel_rgb() {
        assert_eq!(pixel_rgb(&[9]), [9, 9, 9]);
        assert_eq!(pixel_rgb(&[1, 2, 3, 4]), [1, 2, 3]);
    }
}
