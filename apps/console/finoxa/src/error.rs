use common::ErrorLocation;

use thiserror::Error;

/// Errors surfaced by the terminal application.
#[derive(Debug, Error)]
pub enum FinoxaError {
    /// Error from this App
    #[error("Finoxa Error: {message} {location}")]
    Finoxa {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (config, session, routing, HTTP)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Reading commands or writing output failed
    #[error("Terminal Error: {message} {location}")]
    Terminal {
        message: String,
        location: ErrorLocation,
    },
}
