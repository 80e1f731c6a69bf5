use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

/// Failures while persisting the `token` cookie between runs.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session Read Error: {path}: {source} {location}")]
    Read {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session Parse Error: {path}: {reason} {location}")]
    Parse {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Session Write Error: {path}: {source} {location}")]
    Write {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
