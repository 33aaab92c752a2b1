//! Error types for module analysis.

use std::path::PathBuf;

use sillage_esquisse::ResolveError;

/// Error type for analyzing a module.
#[derive(Debug, thiserror::Error)]
pub enum SillageError {
    /// The parser reported diagnostics; nothing was resolved.
    #[error("failed to parse {}: {}", path.display(), messages.join("; "))]
    Parse {
        path: PathBuf,
        messages: Vec<String>,
    },

    /// The module could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The module contains a construct the resolver rejects.
    #[error("{0}")]
    Resolve(#[from] ResolveError),
}

/// Result type for module analysis.
pub type SillageResult<T> = Result<T, SillageError>;
