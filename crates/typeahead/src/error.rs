//! Error types for the typeahead crate.

use thiserror::Error;

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, TypeaheadError>;

/// Errors raised while setting up a picker.
///
/// Interaction events never fail; once a picker exists every input is
/// handled by policy.
#[derive(Debug, Error)]
pub enum TypeaheadError {
    /// Items or search options were rejected
    #[error(transparent)]
    Search(#[from] lazer_search::SearchError),

    /// Picker options out of range
    #[error("Invalid picker options: {0}")]
    InvalidOptions(String),
}

impl From<TypeaheadError> for lazer_core::Error {
    fn from(err: TypeaheadError) -> Self {
        use lazer_core::ErrorCode;
        use lazer_search::SearchError;

        let code = match &err {
            TypeaheadError::Search(SearchError::InvalidItems(_)) => ErrorCode::InvalidItems,
            _ => ErrorCode::InvalidInput,
        };
        lazer_core::Error::new(code, err.to_string()).with_source(err)
    }
}
