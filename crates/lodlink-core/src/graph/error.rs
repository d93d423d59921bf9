//! Graph error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// IO error.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed N-Triples input.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl GraphError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Io {
            path: path.into(),
            source,
        }
    }
}
