//! Error types for review scanning.
//!
//! Scoring itself never fails. Errors only arise at the boundary, when a
//! review is constructed from untrusted values or when configuration is
//! loaded from disk.

use thiserror::Error;

/// Errors that can occur while validating input or loading configuration.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A star rating outside the accepted 1-5 range.
    #[error("invalid rating {rating}: expected an integer from 1 to 5")]
    InvalidRating { rating: i64 },

    /// A review payload that does not have the expected shape.
    #[error("invalid review input: {message}")]
    InvalidInput { message: String },

    /// Error reading or parsing a configuration or lexicon file.
    #[error("failed to load config: {path}: {message}")]
    Config { path: String, message: String },
}

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
