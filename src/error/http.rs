use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Outcome collector stopped before the run finished.")]
    CollectorStopped,
}

#[derive(Debug, Error)]
pub enum RequestFileError {
    #[error("Request file not found at '{path}'.")]
    NotFound { path: PathBuf },
    #[error("Failed to read request file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in request file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Request file '{path}' must hold an array or an object with a 'requests' array.")]
    InvalidShape { path: PathBuf },
}
