//! Error types for the textsim library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`TextSimError`] enum.
//!
//! # Examples
//!
//! ```
//! use textsim::error::{Result, TextSimError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextSimError::analysis("tokenization failed"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for textsim operations.
///
/// Note that scoring itself never fails: degenerate inputs produce a
/// non-finite score rather than an error. Errors come from tokenization and
/// from invalid configuration.
#[derive(Error, Debug)]
pub enum TextSimError {
    /// Analysis-related errors (tokenization, invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors raised by external collaborators (e.g. a segmentation engine
    /// backing a [`Tokenizer`](crate::analysis::tokenizer::Tokenizer))
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextSimError.
pub type Result<T> = std::result::Result<T, TextSimError>;

impl TextSimError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextSimError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        TextSimError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextSimError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextSimError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = TextSimError::invalid_operation("Test invalid operation");
        assert_eq!(
            error.to_string(),
            "Invalid operation: Test invalid operation"
        );

        let error = TextSimError::other("Test other error");
        assert_eq!(error.to_string(), "Error: Test other error");
    }

    #[test]
    fn test_anyhow_conversion() {
        let anyhow_error = anyhow::anyhow!("segmenter exploded");
        let error = TextSimError::from(anyhow_error);

        match error {
            TextSimError::Anyhow(_) => {}
            _ => panic!("Expected Anyhow error variant"),
        }
    }
}
