//! Piecewise-linear interpolation over arbitrary x-value arrays.

use super::Numa;
use crate::error::{Error, Result};

/// Evaluate the piecewise-linear function through `(known_x, known_y)` at
/// every point of `x`.
///
/// `known_x` must be sorted in non-decreasing order. Queries at or below
/// `known_x[0]` return `known_y[0]`; queries at or above the last known x
/// return the last known y. Inside the domain the bracketing segment is the
/// first `j` (scanning forward) with `x <= known_x[j]`, so in a run of tied
/// x-values the lowest-index knot wins.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when `known_x` is empty
/// - [`Error::LengthMismatch`] when `known_x` and `known_y` differ in length
pub fn interp(x: &[f64], known_x: &[f64], known_y: &[f64]) -> Result<Numa> {
    if known_x.len() != known_y.len() {
        return Err(Error::LengthMismatch {
            expected: known_x.len(),
            actual: known_y.len(),
        });
    }
    let (Some(&x_first), Some(&x_last)) = (known_x.first(), known_x.last()) else {
        return Err(Error::EmptyInput("interp known_x"));
    };
    let n = known_x.len();

    let out = x
        .iter()
        .map(|&xi| {
            if xi <= x_first {
                return known_y[0];
            }
            if xi >= x_last {
                return known_y[n - 1];
            }
            // x_first < xi < x_last, so some j in 1..n satisfies the bound
            let j = (1..n).find(|&j| xi <= known_x[j]).unwrap_or(n - 1);
            let (x0, x1) = (known_x[j - 1], known_x[j]);
            let (y0, y1) = (known_y[j - 1], known_y[j]);
            let denom = x1 - x0;
            if denom == 0.0 {
                y1
            } else {
                y0 + (xi - x0) / denom * (y1 - y0)
            }
        })
        .collect();
    Ok(out)
}

impl Numa {
    /// Interpolate `self` (query points) through the curve `(nax, nay)`.
    ///
    /// See [`interp`] for the clamping and tie-break rules.
    pub fn interpolate_arbx(&self, nax: &Numa, nay: &Numa) -> Result<Numa> {
        interp(self.as_slice(), nax.as_slice(), nay.as_slice())
    }
}
