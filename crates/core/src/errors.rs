//! Core error types for the Homestead application.
//!
//! Every fallible operation in the core returns [`Result`]. Undefined ratios in
//! the investment calculator are not errors; they are reported as `None` by the
//! calculator itself and never reach this module.

use std::sync::PoisonError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the marketplace core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Investment calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Not signed in: {0}")]
    Unauthorized(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised by the investment calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The amortization horizon is undefined (loan term of zero years).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Arithmetic overflow while computing {0}")]
    Overflow(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

/// Maps a poisoned in-memory store lock to [`Error::Unexpected`].
pub(crate) fn lock_poisoned<T>(err: PoisonError<T>) -> Error {
    Error::Unexpected(format!("in-memory store lock poisoned: {}", err))
}

/// Shorthand for the most common validation failure.
pub(crate) fn invalid_input(message: impl Into<String>) -> Error {
    Error::Validation(ValidationError::InvalidInput(message.into()))
}

/// Rejects blank strings for a named required field.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    Ok(())
}
