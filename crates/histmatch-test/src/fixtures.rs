//! Deterministic synthetic pixel buffers

use crate::error::{TestError, TestResult};
use histmatch_core::ChannelCount;

fn check_channels(channels: usize) -> TestResult<usize> {
    Ok(ChannelCount::from_usize(channels)?.get())
}

/// Buffer where every color channel of every pixel equals `value`.
///
/// Alpha, when present, is 255.
pub fn constant(width: usize, height: usize, channels: usize, value: u8) -> TestResult<Vec<u8>> {
    let nc = check_channels(channels)?;
    let mut buf = vec![value; width * height * nc];
    if nc == 4 {
        buf.iter_mut().skip(3).step_by(4).for_each(|a| *a = 255);
    }
    Ok(buf)
}

/// Horizontal ramp: each channel of pixel `(x, y)` is `x * 255 / (width - 1)`,
/// offset per channel by `channel * shift` (wrapping).
///
/// Alpha, when present, cycles through `y` so pass-through can be checked.
pub fn gradient(width: usize, height: usize, channels: usize, shift: u8) -> TestResult<Vec<u8>> {
    let nc = check_channels(channels)?;
    if width < 2 {
        return Err(TestError::InvalidFixture(format!(
            "gradient needs width >= 2, got {width}"
        )));
    }
    let mut buf = Vec::with_capacity(width * height * nc);
    for y in 0..height {
        for x in 0..width {
            let base = (x * 255 / (width - 1)) as u8;
            for c in 0..nc {
                if c == 3 {
                    buf.push((y % 256) as u8);
                } else {
                    buf.push(base.wrapping_add(shift.wrapping_mul(c as u8)));
                }
            }
        }
    }
    Ok(buf)
}

/// Pseudo-random samples in `[lo, hi]`; alpha, when present, is random too.
pub fn noise(
    width: usize,
    height: usize,
    channels: usize,
    lo: u8,
    hi: u8,
    seed: u32,
) -> TestResult<Vec<u8>> {
    let nc = check_channels(channels)?;
    if lo > hi {
        return Err(TestError::InvalidFixture(format!("noise range {lo} > {hi}")));
    }
    let mut rng = SimpleRng::new(seed);
    let span = (hi - lo) as u64 + 1;
    Ok((0..width * height * nc)
        .map(|_| lo + (rng.next() >> 33).wrapping_rem(span) as u8)
        .collect())
}

/// Reverse the pixel order of an interleaved buffer, keeping each pixel intact.
pub fn reverse_pixels(data: &[u8], channels: usize) -> TestResult<Vec<u8>> {
    let nc = check_channels(channels)?;
    Ok(data.chunks_exact(nc).rev().flatten().copied().collect())
}

/// Linear congruential generator for reproducible fixtures
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // Knuth's MMIX constants
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_alpha_opaque() {
        let buf = constant(2, 1, 4, 7).unwrap();
        assert_eq!(buf, vec![7, 7, 7, 255, 7, 7, 7, 255]);
    }

    #[test]
    fn test_gradient_endpoints() {
        let buf = gradient(256, 1, 1, 0).unwrap();
        assert_eq!(buf[0], 0);
        assert_eq!(buf[255], 255);
        assert!(gradient(1, 1, 3, 0).is_err());
    }

    #[test]
    fn test_noise_range_and_determinism() {
        let a = noise(16, 16, 3, 40, 60, 7).unwrap();
        let b = noise(16, 16, 3, 40, 60, 7).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (40..=60).contains(&v)));
    }

    #[test]
    fn test_reverse_pixels() {
        let rev = reverse_pixels(&[1, 2, 3, 4, 5, 6], 3).unwrap();
        assert_eq!(rev, vec![4, 5, 6, 1, 2, 3]);
    }
}
