use std::path::PathBuf;
use thiserror::Error;

/// The main error type for heif-regions operations.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid region data: {0}")]
    InvalidRegionData(String),

    #[error("Failed to serialize region item from {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
