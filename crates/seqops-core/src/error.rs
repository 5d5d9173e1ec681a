//! Error types for reduction operations
//!
//! Provides a unified error type for the seqops crates.

use thiserror::Error;

/// Core error type for reduction operations
#[derive(Error, Debug)]
pub enum Error {
    /// Two sequences required to be of equal length are not
    #[error("Length mismatch: left operand has {left} elements, right operand has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for mismatched sequence lengths
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Check that two slices have equal length
    pub fn check_equal_length<A, B>(left: &[A], right: &[B]) -> Result<()> {
        if left.len() != right.len() {
            return Err(Self::length_mismatch(left.len(), right.len()));
        }
        Ok(())
    }
}
