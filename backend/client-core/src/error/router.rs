use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RouterError {
    #[error("Redirect Loop Error: {path} after {hops} redirects {location}")]
    RedirectLoop {
        path: String,
        hops: usize,
        location: ErrorLocation,
    },

    #[error("Invalid Path Error: {path} {location}")]
    InvalidPath {
        path: String,
        location: ErrorLocation,
    },
}

impl RouterError {
    #[track_caller]
    pub fn redirect_loop(path: impl Into<String>, hops: usize) -> Self {
        RouterError::RedirectLoop {
            path: path.into(),
            hops,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_path(path: impl Into<String>) -> Self {
        RouterError::InvalidPath {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
