//! histmatch-test - Regression test framework for histmatch
//!
//! Provides [`RegParams`], an indexed checker that records every failed
//! comparison and reports them together, plus deterministic synthetic
//! pixel buffers. The engine performs no I/O, so fixtures are generated
//! in memory rather than loaded from image files.
//!
//! # Usage
//!
//! ```ignore
//! use histmatch_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("rgbmatch");
//! rp.compare_values(256.0, hist.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;
