//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while preparing a search.
///
/// Searching itself never fails; these cover the inputs handed to it.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Item list could not be parsed
    #[error("Invalid items: {0}")]
    InvalidItems(#[from] serde_json::Error),

    /// Search options out of range
    #[error("Invalid search options: {0}")]
    InvalidOptions(String),
}

/// Error code for integration with lazer-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Item list could not be parsed
    InvalidItems = 11001,
    /// Search options out of range
    InvalidOptions = 11002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidItems(_) => SearchErrorCode::InvalidItems,
            SearchError::InvalidOptions(_) => SearchErrorCode::InvalidOptions,
        }
    }
}
