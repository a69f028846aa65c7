// models/src/errors.rs

pub use thiserror::Error;

/// A validation error produced at the input boundary.
///
/// These never terminate an operation; the caller decides the retry
/// policy (the CLI re-prompts, tests assert on the variant).
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A numeric field received something that does not parse as a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// Age outside the accepted range.
    #[error("age {0} is out of range (0-120)")]
    AgeOutOfRange(i64),
    /// Gender other than "M" or "F".
    #[error("gender must be M or F, got '{0}'")]
    InvalidGender(String),
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
