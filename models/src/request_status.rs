use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of the most recently completed store request.
///
/// Stores hold `Option<RequestStatus>`; `None` means no request has
/// completed since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Success,
    Error,
}

impl RequestStatus {
    /// Capitalised form used as an alert title.
    pub fn title(&self) -> &'static str {
        match self {
            RequestStatus::Success => "Success",
            RequestStatus::Error => "Error",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Success => write!(f, "success"),
            RequestStatus::Error => write!(f, "error"),
        }
    }
}
