//! Opaque user record returned by `/user`, `/auth/login` and friends.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_KEY_FIELD: &str = "apiKey";
const API_KEY_FIELD_SNAKE: &str = "api_key";

/// The backend's user object, kept as raw JSON.
///
/// The client never validates the shape. It only looks up the few fields
/// the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Value);

impl UserRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The current API key, if one is set.
    ///
    /// Deleting a key stores an empty string on the backend, so empty
    /// counts as absent.
    pub fn api_key(&self) -> Option<&str> {
        [API_KEY_FIELD, API_KEY_FIELD_SNAKE]
            .iter()
            .find_map(|field| self.0.get(*field).and_then(Value::as_str))
            .filter(|key| !key.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }
}

impl From<Value> for UserRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
