//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture parameters do not describe a valid buffer
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] histmatch_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
