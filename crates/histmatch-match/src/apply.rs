//! Apply phase: run a per-pixel transform over the full-resolution source
//!
//! The output buffer is split into chunks of whole pixels. The cancel token
//! is checked before each chunk; if it fires, the partially written output
//! is dropped and [`MatchError::Cancelled`] is returned.

use histmatch_core::PixelBuffer;
use rayon::prelude::*;

use crate::options::{Execution, ExecutionStrategy};
use crate::{MatchError, MatchResult};

/// Produce a new buffer by calling `f(source_pixel, output_pixel)` for every
/// pixel of `source`.
///
/// `output_pixel` starts zeroed and has the same channel count as the source.
pub fn apply_pixels<F>(source: &PixelBuffer<'_>, execution: &Execution, f: F) -> MatchResult<Vec<u8>>
where
    F: Fn(&[u8], &mut [u8]) + Sync,
{
    let nc = source.channels().get();
    let chunk_len = execution.strategy.chunk_pixels().saturating_mul(nc);
    let mut out = vec![0u8; source.len()];

    let run_chunk = |(src, dst): (&[u8], &mut [u8])| -> MatchResult<()> {
        if execution.is_cancelled() {
            return Err(MatchError::Cancelled);
        }
        for (sp, dp) in src.chunks_exact(nc).zip(dst.chunks_exact_mut(nc)) {
            f(sp, dp);
        }
        Ok(())
    };

    match execution.strategy {
        ExecutionStrategy::Sequential => source
            .data()
            .chunks(chunk_len)
            .zip(out.chunks_mut(chunk_len))
            .try_for_each(run_chunk)?,
        ExecutionStrategy::Parallel { .. } => source
            .data()
            .par_chunks(chunk_len)
            .zip(out.par_chunks_mut(chunk_len))
            .try_for_each(run_chunk)?,
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CancelToken, DEFAULT_CHUNK_PIXELS};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn invert(src: &[u8], dst: &mut [u8]) {
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            *d = 255 - *s;
        }
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let data: Vec<u8> = (0..3000).map(|i| (i % 251) as u8).collect();
        let buf = PixelBuffer::new(&data, 3).unwrap();
        let seq = apply_pixels(&buf, &Execution::default(), invert).unwrap();
        let par = apply_pixels(
            &buf,
            &Execution {
                strategy: ExecutionStrategy::Parallel { chunk_pixels: 7 },
                cancel: None,
            },
            invert,
        )
        .unwrap();
        assert_eq!(seq, par);
        assert_eq!(seq.len(), data.len());
        assert_eq!(seq[0], 255);
    }

    #[test]
    fn test_cancelled_before_start() {
        let data = vec![0u8; 64];
        let buf = PixelBuffer::new(&data, 4).unwrap();
        let token = CancelToken::new();
        token.cancel();
        for strategy in [ExecutionStrategy::Sequential, ExecutionStrategy::parallel()] {
            let exec = Execution {
                strategy,
                cancel: Some(token.clone()),
            };
            assert_eq!(
                apply_pixels(&buf, &exec, invert),
                Err(MatchError::Cancelled)
            );
        }
    }

    #[test]
    fn test_oversized_chunk() {
        let data: Vec<u8> = (0..30).collect();
        let buf = PixelBuffer::new(&data, 3).unwrap();
        let expected: Vec<u8> = data.iter().map(|v| 255 - v).collect();
        for strategy in [
            ExecutionStrategy::Sequential,
            ExecutionStrategy::Parallel {
                chunk_pixels: usize::MAX,
            },
        ] {
            let exec = Execution {
                strategy,
                cancel: None,
            };
            assert_eq!(apply_pixels(&buf, &exec, invert).unwrap(), expected);
        }
    }

    #[test]
    fn test_cancelled_mid_run_sequential() {
        // Three chunks; the token fires while the first one is running
        let data = vec![0u8; 2 * DEFAULT_CHUNK_PIXELS + 10];
        let buf = PixelBuffer::new(&data, 1).unwrap();
        let token = CancelToken::new();
        let exec = Execution {
            strategy: ExecutionStrategy::Sequential,
            cancel: Some(token.clone()),
        };
        let visited = AtomicUsize::new(0);
        let result = apply_pixels(&buf, &exec, |src, dst| {
            visited.fetch_add(1, Ordering::Relaxed);
            token.cancel();
            invert(src, dst);
        });
        assert_eq!(result, Err(MatchError::Cancelled));
        assert_eq!(visited.load(Ordering::Relaxed), DEFAULT_CHUNK_PIXELS);
    }

    #[test]
    fn test_cancelled_mid_run_parallel() {
        let data = vec![0u8; 40_000];
        let buf = PixelBuffer::new(&data, 1).unwrap();
        let token = CancelToken::new();
        let exec = Execution {
            strategy: ExecutionStrategy::Parallel { chunk_pixels: 4 },
            cancel: Some(token.clone()),
        };
        let visited = AtomicUsize::new(0);
        let result = apply_pixels(&buf, &exec, |src, dst| {
            visited.fetch_add(1, Ordering::Relaxed);
            token.cancel();
            invert(src, dst);
        });
        assert_eq!(result, Err(MatchError::Cancelled));
        assert!(visited.load(Ordering::Relaxed) < data.len());
    }

    #[test]
    fn test_empty_source() {
        let buf = PixelBuffer::new(&[], 3).unwrap();
        let out = apply_pixels(&buf, &Execution::default(), invert).unwrap();
        assert!(out.is_empty());
    }
}
