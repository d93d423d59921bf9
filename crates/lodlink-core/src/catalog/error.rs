//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while talking to the external catalogs.
///
/// Only two kinds exist: the request never completed, or the body that
/// came back could not be understood. Callers decide whether to degrade
/// to absence (try the next candidate or strategy) or surface the error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Transport(err.to_string())
    }
}
