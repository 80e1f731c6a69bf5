//! The JSON envelope every backend route responds with.
//!
//! Successful responses carry `{status: "success", data}`; failures carry
//! `{status: "error", message}`. FastAPI's own exceptions use `detail`
//! instead of `message`.

use crate::UserRecord;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiEnvelope {
    /// `data` as a user record. A JSON `null` counts as absent.
    pub fn user(&self) -> Option<UserRecord> {
        self.data
            .as_ref()
            .filter(|value| !value.is_null())
            .cloned()
            .map(UserRecord::new)
    }

    /// Best human-readable error text: `message`, then `detail`.
    ///
    /// `detail` is either a string or, for request validation failures, a
    /// list of `{msg}` objects; the first `msg` is used.
    pub fn error_text(&self) -> Option<String> {
        if let Some(message) = self.message.as_ref().filter(|m| !m.is_empty()) {
            return Some(message.clone());
        }

        match self.detail.as_ref()? {
            Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
            Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(Value::as_str))
                .map(str::to_string),
            _ => None,
        }
    }
}
