//! Error types for amistad operations.
//!
//! Provides structured, recoverable error context for library consumers:
//! validation failures and empty query results are surfaced as values the
//! caller can branch on, never as panics or silent defaults.

use std::fmt;

/// Main error type for amistad operations.
///
/// The variants map onto the three caller-visible failure classes:
/// malformed input (`Validation`), a corpus that cannot produce a
/// vocabulary (`EmptyCorpus`), and a query that resolves to zero eligible
/// recommendations (`NotFound`). `DimensionMismatch` guards the pairwise
/// vector operations.
///
/// # Examples
///
/// ```
/// use amistad::error::AmistadError;
///
/// let err = AmistadError::Validation {
///     message: "age '-3' is not a non-negative integer".to_string(),
/// };
/// assert!(err.to_string().contains("Validation failed"));
/// ```
#[derive(Debug)]
pub enum AmistadError {
    /// Malformed profile field: unparseable age, empty interests after
    /// normalization, or a non-positive result count.
    Validation {
        /// Validation failure message
        message: String,
    },

    /// Vocabulary fit attempted on an empty or fully-stop-worded corpus.
    EmptyCorpus {
        /// What was missing from the corpus
        message: String,
    },

    /// Query resolved to zero eligible recommendations.
    NotFound {
        /// Caller-facing description of the empty result
        message: String,
    },

    /// Feature vectors of different lengths passed to a pairwise operation.
    DimensionMismatch {
        /// Expected vector length
        expected: usize,
        /// Actual vector length found
        actual: usize,
    },
}

impl fmt::Display for AmistadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmistadError::Validation { message } => {
                write!(f, "Validation failed: {message}")
            }
            AmistadError::EmptyCorpus { message } => {
                write!(f, "Empty corpus: {message}")
            }
            AmistadError::NotFound { message } => {
                write!(f, "Not found: {message}")
            }
            AmistadError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Vector dimension mismatch: expected length {expected}, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for AmistadError {}

impl AmistadError {
    /// Create a validation error from any printable message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an empty-corpus error.
    #[must_use]
    pub fn empty_corpus(message: impl Into<String>) -> Self {
        Self::EmptyCorpus {
            message: message.into(),
        }
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AmistadError>;
