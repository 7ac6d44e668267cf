//! Selection error types

use thiserror::Error;

/// Selection errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// No provider survived the filter chain. The caller owns the
    /// fail-over decision; selection never retries internally.
    #[error("provider list is empty")]
    EmptyProviderList,
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, SelectError>;
