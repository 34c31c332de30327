//! Error types for lab-ledger
//!
//! Two families matter to callers: validation failures (bad input shape or
//! content) and index failures (a position outside the store). Both are
//! recoverable and never leave the store modified.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected input, reported before anything is inserted or compared.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Fewer results than an analysis needs
    #[error("at least {minimum} results are required to create an experiment (got {count})")]
    TooFewResults {
        /// Number of results submitted
        count: usize,
        /// Required minimum
        minimum: usize,
    },

    /// Date is not a real calendar date in DD/MM/YYYY form
    #[error("invalid date '{input}': expected DD/MM/YYYY")]
    InvalidDate {
        /// Text as submitted
        input: String,
    },

    /// Category outside the closed set
    #[error("invalid experiment category '{input}': expected one of Chemistry, Biology, Physics")]
    InvalidCategory {
        /// Text as submitted
        input: String,
    },

    /// Blank experiment name
    #[error("experiment name must not be empty")]
    EmptyName,

    /// At least one comparison position is outside the store
    #[error("invalid index in comparison {indices:?}: store holds {len} experiments")]
    InvalidIndices {
        /// Positions as requested
        indices: Vec<usize>,
        /// Store size at the time of the request
        len: usize,
    },
}

/// lab-ledger error types
#[derive(Error, Debug)]
pub enum Error {
    /// Input failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Position outside `0..len`
    #[error("Index error: position {index} is out of range (store holds {len} experiments)")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Store size at the time of the request
        len: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for input validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for out-of-range positions.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
