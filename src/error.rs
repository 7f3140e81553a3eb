use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("team not found: {0}")]
    TeamNotFound(String),
    #[error("player search failed: {0}")]
    Search(String),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<regex::Error> for CoreError {
    fn from(err: regex::Error) -> Self {
        Self::Search(err.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

/// Rejected form input. Raised before any service call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    #[test]
    fn oversized_search_pattern_is_a_search_error() {
        let err = RegexBuilder::new("Stockton").size_limit(0).build().unwrap_err();
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::Search(_)));
        assert!(core.to_string().starts_with("player search failed"));
    }
}
