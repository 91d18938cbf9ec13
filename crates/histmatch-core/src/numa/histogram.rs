//! Histogram construction for Numa
//!
//! Fixed-width binning of sample sequences and conversion of histograms
//! into cumulative distributions.

use super::Numa;
use crate::error::{Error, Result};

/// Domain bounds used for binning
///
/// A span of zero (or less) is not rejected: the denominator falls back to
/// `1.0`, so every sample lands in a bin computed against a unit span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinRange {
    pub min: f64,
    pub max: f64,
}

impl BinRange {
    /// Create a new range
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range spanned by the samples themselves
    ///
    /// Returns `None` for an empty slice.
    pub fn of_samples(values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    /// Width of the range
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Span used as a denominator, guarded against zero/negative widths
    #[inline]
    pub fn guarded_span(&self) -> f64 {
        let span = self.span();
        if span > 0.0 { span } else { 1.0 }
    }

    /// Bin index of `value` for a histogram of `bin_count` bins.
    ///
    /// `floor((value - min) * bin_count / span)` clamped to
    /// `[0, bin_count - 1]`, so `value == max` lands in the last bin.
    #[inline]
    pub fn bin_index(&self, value: f64, bin_count: usize) -> usize {
        let pos = ((value - self.min) * bin_count as f64 / self.guarded_span()).floor();
        if pos <= 0.0 || pos.is_nan() {
            0
        } else {
            (pos as usize).min(bin_count - 1)
        }
    }
}

/// Build a fixed-width histogram over `values`.
///
/// When `range` is `None` the bounds default to the sample minimum and
/// maximum. With `normalize` set, every bin is divided by the number of
/// samples so the bins sum to 1.
///
/// The returned Numa has parameters `(min, span / bin_count)`.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when `values` is empty
/// - [`Error::InvalidParameter`] when `bin_count == 0`
pub fn bincount(
    values: &[f64],
    bin_count: usize,
    range: Option<BinRange>,
    normalize: bool,
) -> Result<Numa> {
    if bin_count == 0 {
        return Err(Error::InvalidParameter("bin_count must be >= 1".to_string()));
    }
    let range = match range {
        Some(r) => r,
        None => BinRange::of_samples(values).ok_or(Error::EmptyInput("bincount values"))?,
    };
    if values.is_empty() {
        return Err(Error::EmptyInput("bincount values"));
    }
    if range.span() <= 0.0 {
        log::warn!(
            "degenerate bin range [{}, {}], using unit span",
            range.min,
            range.max
        );
    }

    let mut counts = vec![0.0f64; bin_count];
    for &v in values {
        counts[range.bin_index(v, bin_count)] += 1.0;
    }
    if normalize {
        let n = values.len() as f64;
        counts.iter_mut().for_each(|c| *c /= n);
    }

    let mut hist = Numa::from_vec(counts);
    hist.set_parameters(range.min, range.guarded_span() / bin_count as f64);
    Ok(hist)
}

/// Running total of `values`: entry `i` is `values[0] + ... + values[i]`.
pub fn cumsum(values: &[f64]) -> Numa {
    values
        .iter()
        .scan(0.0f64, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

impl Numa {
    /// Divide every value by the total so the array sums to 1.0.
    ///
    /// Returns `None` when the array is empty or sums to zero.
    pub fn normalize_histogram(&self) -> Option<Numa> {
        let total = self.sum()?;
        if total == 0.0 {
            return None;
        }
        let mut out: Numa = self.iter().map(|v| v / total).collect();
        out.set_parameters(self.startx, self.delx);
        Some(out)
    }

    /// Cumulative sum of this array, keeping its x-parameters.
    pub fn cumulative(&self) -> Numa {
        let mut out = cumsum(self.as_slice());
        out.set_parameters(self.startx, self.delx);
        out
    }

    /// Cumulative distribution: normalized histogram followed by a running sum.
    pub fn cumulative_distribution(&self) -> Option<Numa> {
        self.normalize_histogram().map(|h| h.cumulative())
    }
}
