//! Error types for manifest load/store.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Manifest-level failures. All of these abort the invoked operation;
/// per-item trouble is reported through stage outcomes instead.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest not found at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read manifest {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("manifest {path} is not valid JSON")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("manifest {path} has no \"data\" array")]
    InvalidSchema { path: PathBuf },

    #[error("failed to write manifest {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
