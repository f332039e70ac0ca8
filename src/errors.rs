//! Typed errors for the data-loading path.

use thiserror::Error;

/// Errors raised while loading the workspace data files.
///
/// A missing file is not an error (the store degrades to an empty
/// collection); these variants cover unreadable and unparseable content.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed items file at {path}: {source}")]
    ItemsParseFailed {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed pipelines file at {path}: {source}")]
    PipelinesParseFailed {
        path: std::path::PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
