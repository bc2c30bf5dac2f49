use std::path::PathBuf;
use thiserror::Error;

/// Why the country source could not be read.
/// Callers treat every variant as "no data available".
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("source does not look like a country list:\n{}", .0.join("\n"))]
    NonConforming(Vec<String>),
}
