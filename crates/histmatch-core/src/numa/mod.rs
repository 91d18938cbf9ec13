//! Numa - Numeric arrays
//!
//! Arrays of floating-point numbers used for histograms, cumulative
//! distributions and lookup tables. A `Numa` optionally carries
//! `startx`/`delx` parameters so that index `i` corresponds to the domain
//! value `startx + i * delx` (the lower edge of bin `i` for histograms).

mod histogram;
mod interpolation;

pub use histogram::{BinRange, bincount, cumsum};
pub use interpolation::interp;

use crate::error::{Error, Result};

/// Array of floating-point numbers
///
/// `Numa` manages a dynamic array of `f64` values. The optional
/// parameters `startx` and `delx` describe evenly-spaced x positions,
/// which is how a histogram records the domain it was binned over.
#[derive(Debug, Clone, PartialEq)]
pub struct Numa {
    data: Vec<f64>,
    startx: f64,
    delx: f64,
}

impl Default for Numa {
    fn default() -> Self {
        Self::new()
    }
}

impl Numa {
    /// Create a new empty Numa with parameters `(0.0, 1.0)`
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            startx: 0.0,
            delx: 1.0,
        }
    }

    /// Create a Numa with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Create a Numa from a vector of values
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            data,
            ..Self::new()
        }
    }

    /// Create a Numa from a slice of values
    pub fn from_slice(data: &[f64]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Create a Numa of `n` zeros
    pub fn zeros(n: usize) -> Self {
        Self::from_vec(vec![0.0; n])
    }

    /// Create `n` evenly spaced values from `start` to `end` inclusive.
    ///
    /// `n == 1` yields `[start]`; `n == 0` yields an empty array.
    /// The parameters are set to `(start, step)`.
    pub fn linspace(start: f64, end: f64, n: usize) -> Self {
        let step = if n > 1 {
            (end - start) / (n - 1) as f64
        } else {
            0.0
        };
        let data = (0..n).map(|i| start + i as f64 * step).collect();
        Self {
            data,
            startx: start,
            delx: step,
        }
    }

    /// Get the number of values
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a value by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Add a value to the end
    pub fn push(&mut self, val: f64) {
        self.data.push(val);
    }

    /// Set a value at index
    pub fn set(&mut self, index: usize, val: f64) -> Result<()> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or_else(|| Error::InvalidParameter(format!("index {index} >= {len}")))?;
        *slot = val;
        Ok(())
    }

    /// Get the underlying data as a slice
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get the underlying vector (consuming self)
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Get the parameters (startx, delx)
    pub fn parameters(&self) -> (f64, f64) {
        (self.startx, self.delx)
    }

    /// Set the parameters (startx, delx)
    pub fn set_parameters(&mut self, startx: f64, delx: f64) {
        self.startx = startx;
        self.delx = delx;
    }

    /// Get the x-value for a given index
    pub fn x_value(&self, index: usize) -> f64 {
        self.startx + index as f64 * self.delx
    }

    /// Get the minimum value and its index (first occurrence)
    pub fn min(&self) -> Option<(f64, usize)> {
        self.data
            .iter()
            .copied()
            .enumerate()
            .fold(None, |acc, (i, v)| match acc {
                Some((m, _)) if m <= v => acc,
                _ => Some((v, i)),
            })
    }

    /// Get the maximum value and its index (first occurrence)
    pub fn max(&self) -> Option<(f64, usize)> {
        self.data
            .iter()
            .copied()
            .enumerate()
            .fold(None, |acc, (i, v)| match acc {
                Some((m, _)) if m >= v => acc,
                _ => Some((v, i)),
            })
    }

    /// Get the sum of all values, or `None` when empty
    pub fn sum(&self) -> Option<f64> {
        if self.data.is_empty() {
            None
        } else {
            Some(self.data.iter().sum())
        }
    }

    /// Check whether the values are non-decreasing
    pub fn is_non_decreasing(&self) -> bool {
        self.data.windows(2).all(|w| w[0] <= w[1])
    }

    /// Create an iterator over values
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.data.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Numa {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Numa {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl FromIterator<f64> for Numa {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for Numa {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let na = Numa::linspace(0.0, 255.0, 256);
        assert_eq!(na.len(), 256);
        assert_eq!(na[0], 0.0);
        assert!((na[255] - 255.0).abs() < 1e-9);
        assert!((na[128] - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_linspace_single_point() {
        let na = Numa::linspace(-127.0, 127.0, 1);
        assert_eq!(na.as_slice(), &[-127.0]);
    }

    #[test]
    fn test_min_max_first_occurrence() {
        let na = Numa::from_vec(vec![3.0, 1.0, 5.0, 1.0, 5.0]);
        assert_eq!(na.min(), Some((1.0, 1)));
        assert_eq!(na.max(), Some((5.0, 2)));
        assert_eq!(Numa::new().min(), None);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut na = Numa::zeros(2);
        assert!(na.set(1, 4.0).is_ok());
        assert!(na.set(2, 4.0).is_err());
        assert_eq!(na.as_slice(), &[0.0, 4.0]);
    }

    #[test]
    fn test_x_value() {
        let mut na = Numa::zeros(4);
        na.set_parameters(10.0, 2.5);
        assert_eq!(na.x_value(0), 10.0);
        assert_eq!(na.x_value(3), 17.5);
    }
}
