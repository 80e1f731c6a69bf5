use crate::ApiEnvelope;

use serde_json::json;

fn parse(value: serde_json::Value) -> ApiEnvelope {
    serde_json::from_value(value).unwrap()
}

/// **VALUE**: The backend's `message` is preferred as the error text.
///
/// **WHY THIS MATTERS**: "User is already exists" and "Invalid credentials" are what the
/// signup page shows the user.
///
/// **BUG THIS CATCHES**: Would catch `detail` taking precedence over `message`.
#[test]
fn given_error_body_with_message_when_error_text_then_returns_message() {
    let envelope = parse(json!({"status": "error", "message": "Invalid credentials"}));

    assert_eq!(envelope.error_text().as_deref(), Some("Invalid credentials"));
}

/// **VALUE**: FastAPI `HTTPException` bodies still produce readable text.
///
/// **WHY THIS MATTERS**: `/user/verify-apikey` and 500s respond with `{detail}` only; without
/// the fallback the user sees an empty message.
///
/// **BUG THIS CATCHES**: Would catch the `detail` fallback being dropped.
#[test]
fn given_detail_string_when_error_text_then_returns_detail() {
    let envelope = parse(json!({"detail": "Unauthorized - Invalid API key"}));

    assert_eq!(
        envelope.error_text().as_deref(),
        Some("Unauthorized - Invalid API key")
    );
}

#[test]
fn given_validation_detail_list_when_error_text_then_returns_first_msg() {
    let envelope = parse(json!({
        "detail": [
            {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}
        ]
    }));

    assert_eq!(
        envelope.error_text().as_deref(),
        Some("value is not a valid email address")
    );
}

#[test]
fn given_empty_body_when_error_text_then_none() {
    let envelope = parse(json!({}));

    assert_eq!(envelope.error_text(), None);
    assert!(envelope.user().is_none());
}

#[test]
fn given_null_data_when_user_then_none() {
    let envelope = parse(json!({"status": "success", "data": null}));

    assert!(envelope.user().is_none());
}
