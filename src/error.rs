//! Error types for the prdiff CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The diff parser and renderer never produce these; they only surface from
//! loading input, configuration, and the event log.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for prdiff operations.
#[derive(Error, Debug)]
pub enum PrDiffError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// An input file could not be read.
    #[error("Failed to read input: {0}")]
    InputError(String),

    /// Input was readable but did not match the expected record shape.
    #[error("Invalid input format: {0}")]
    FormatError(String),
}

impl PrDiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrDiffError::UserError(_) => exit_codes::USER_ERROR,
            PrDiffError::InputError(_) => exit_codes::INPUT_FAILURE,
            PrDiffError::FormatError(_) => exit_codes::FORMAT_FAILURE,
        }
    }
}

/// Result type alias for prdiff operations.
pub type Result<T> = std::result::Result<T, PrDiffError>;
