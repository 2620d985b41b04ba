//! Error types for grid construction and seed parsing

use thiserror::Error;

/// Errors produced by the simulation library
#[derive(Debug, Error)]
pub enum LifeError {
    /// Seed is empty or not rectangular
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    /// A cell value other than 0/1 was supplied
    #[error("invalid cell value {value:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: String },
}

impl LifeError {
    pub(crate) fn invalid_grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid { reason: reason.into() }
    }
}

/// Result type for library operations.
pub type LifeResult<T> = Result<T, LifeError>;
