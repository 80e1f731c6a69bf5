use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// Non-2xx response; `message` comes from the response body.
    #[error("Server Error: HTTP {status_code} - {message} {location}")]
    Server {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// A protected call was attempted without a session token.
    #[error("Missing Token Error: {message} {location}")]
    MissingToken {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiClientError {
    #[track_caller]
    pub fn server(status_code: HttpStatusCode, message: impl Into<String>) -> Self {
        ApiClientError::Server {
            status_code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_token(message: impl Into<String>) -> Self {
        ApiClientError::MissingToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The text a store copies into its `message` field.
    ///
    /// Unlike `Display`, this omits the variant prefix and the location.
    pub fn display_message(&self) -> &str {
        match self {
            ApiClientError::Http { message, .. }
            | ApiClientError::Json { message, .. }
            | ApiClientError::UrlParse { message, .. }
            | ApiClientError::Server { message, .. }
            | ApiClientError::MissingToken { message, .. } => message,
        }
    }

    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            ApiClientError::Server { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
