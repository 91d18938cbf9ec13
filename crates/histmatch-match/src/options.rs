//! Matching options, execution strategy and cancellation

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use histmatch_color::ColorSpace;

use crate::{MatchError, MatchResult};

/// Pixels processed between two cancellation checks
pub const DEFAULT_CHUNK_PIXELS: usize = 65_536;

/// What a matching call returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReturnType {
    /// Only the per-band mappings; the source is not remapped
    Mapping,
    /// Mappings plus the remapped full-resolution buffer
    #[default]
    Matched,
}

/// How the apply phase walks the source buffer
///
/// Both strategies produce byte-identical output. Mapping construction is
/// always single-threaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionStrategy {
    /// One thread, chunks of [`DEFAULT_CHUNK_PIXELS`]
    #[default]
    Sequential,
    /// Chunks of `chunk_pixels` pixels processed on the rayon pool
    Parallel { chunk_pixels: usize },
}

impl ExecutionStrategy {
    /// Parallel execution with the default chunk size
    pub fn parallel() -> Self {
        Self::Parallel {
            chunk_pixels: DEFAULT_CHUNK_PIXELS,
        }
    }

    /// Pixels per chunk (at least 1)
    pub fn chunk_pixels(self) -> usize {
        match self {
            Self::Sequential => DEFAULT_CHUNK_PIXELS,
            Self::Parallel { chunk_pixels } => chunk_pixels.max(1),
        }
    }
}

/// Cooperative cancellation flag shared between a caller and a running match
///
/// Cloning shares the flag. The apply phase checks it before every chunk.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token that has not fired
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Execution settings shared by both matching modes
#[derive(Debug, Clone, Default)]
pub struct Execution {
    /// Sequential or parallel apply phase
    pub strategy: ExecutionStrategy,
    /// Optional cancellation flag
    pub cancel: Option<CancelToken>,
}

impl Execution {
    /// Whether the attached token (if any) has fired
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// Options for [`match_histograms_rgb`](crate::match_histograms_rgb)
#[derive(Debug, Clone, Default)]
pub struct RgbMatchOptions {
    /// Mapping only, or mapping plus matched buffer
    pub return_type: ReturnType,
    /// Megapixel ceiling for histogram estimation; `<= 0` disables downsampling
    pub max_mpx: f64,
    /// Apply-phase execution
    pub execution: Execution,
}

impl RgbMatchOptions {
    /// Set the return type
    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    /// Set the megapixel ceiling
    pub fn with_max_mpx(mut self, max_mpx: f64) -> Self {
        self.max_mpx = max_mpx;
        self
    }

    /// Set the execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution.strategy = strategy;
        self
    }

    /// Attach a cancel token
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.execution.cancel = Some(cancel);
        self
    }
}

/// Options for [`match_histograms_colorspaces`](crate::match_histograms_colorspaces)
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Mapping only, or mapping plus matched buffer
    pub return_type: ReturnType,
    /// Megapixel ceiling for histogram estimation; `<= 0` disables downsampling
    pub max_mpx: f64,
    /// Space in which bands are matched
    pub color_space: ColorSpace,
    /// 1-indexed bands of `color_space` to match
    pub bands: Vec<usize>,
    /// Histogram resolution per band
    pub bin_count: usize,
    /// Apply-phase execution
    pub execution: Execution,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            return_type: ReturnType::Matched,
            max_mpx: 0.0,
            color_space: ColorSpace::Rgb,
            bands: vec![1, 2, 3],
            bin_count: 256,
            execution: Execution::default(),
        }
    }
}

impl MatchOptions {
    /// Set the return type
    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    /// Set the megapixel ceiling
    pub fn with_max_mpx(mut self, max_mpx: f64) -> Self {
        self.max_mpx = max_mpx;
        self
    }

    /// Set the color space
    pub fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    /// Set the color space from its identifier (`"lab"`, `"hsv"`, ...)
    ///
    /// # Errors
    ///
    /// [`ColorError::UnsupportedColorSpace`](histmatch_color::ColorError::UnsupportedColorSpace)
    /// for unknown identifiers.
    pub fn with_color_space_name(mut self, name: &str) -> MatchResult<Self> {
        self.color_space = name.parse()?;
        Ok(self)
    }

    /// Set the 1-indexed bands to match
    pub fn with_bands(mut self, bands: &[usize]) -> Self {
        self.bands = bands.to_vec();
        self
    }

    /// Set the number of histogram bins
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    /// Set the execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution.strategy = strategy;
        self
    }

    /// Attach a cancel token
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.execution.cancel = Some(cancel);
        self
    }

    /// 0-indexed, sorted, de-duplicated bands below `color_channels`.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidBandSelection`] when nothing remains.
    pub fn resolve_bands(&self, color_channels: usize) -> MatchResult<Vec<usize>> {
        let mut bands: Vec<usize> = self
            .bands
            .iter()
            .filter_map(|&b| b.checked_sub(1))
            .filter(|&b| b < color_channels)
            .collect();
        bands.sort_unstable();
        bands.dedup();
        if bands.is_empty() {
            return Err(MatchError::InvalidBandSelection {
                bands: self.bands.clone(),
                channels: color_channels,
            });
        }
        Ok(bands)
    }
}
