use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ModelError::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Name of the form field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ModelError::Validation { field, .. } => field,
        }
    }

    /// Message without the location suffix, for display next to the form.
    pub fn display_message(&self) -> &str {
        match self {
            ModelError::Validation { message, .. } => message,
        }
    }
}
