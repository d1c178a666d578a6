//! # Validation Errors
//!
//! The validation error vocabulary for domain primitives. Each newtype
//! enforces its format constraints at construction time; these errors carry
//! the invalid input and the expected format so that operators can diagnose
//! bad data without guesswork.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Complaint number is empty or whitespace-only.
    #[error("invalid complaint number: \"{0}\" (expected a non-empty case reference)")]
    InvalidComplaintNumber(String),

    /// Offense code is empty or whitespace-only.
    #[error("invalid offense code: \"{0}\" (expected a non-empty catalog code)")]
    InvalidOffenseCode(String),

    /// Severity level outside the 1..=5 band scale.
    #[error("invalid severity level: {0} (expected a band between 1 and 5)")]
    InvalidSeverityLevel(u8),

    /// Punishment band outside the 1..=5 band scale.
    #[error("invalid punishment band: {0} (expected a band between 1 and 5)")]
    InvalidPunishmentBand(u8),
}
