use crate::UserRecord;

use serde_json::json;

/// **VALUE**: The API key is read from the camelCase field the dashboard uses.
///
/// **WHY THIS MATTERS**: The dashboard's key panel and "New Key" button both key off this.
///
/// **BUG THIS CATCHES**: Would catch the accessor only checking `api_key`.
#[test]
fn given_camel_case_key_when_api_key_then_returns_value() {
    let record = UserRecord::new(json!({"_id": "1", "email": "a@b.c", "apiKey": "fx_live_abc"}));

    assert_eq!(record.api_key(), Some("fx_live_abc"));
    assert_eq!(record.email(), Some("a@b.c"));
}

#[test]
fn given_snake_case_key_when_api_key_then_falls_back() {
    let record = UserRecord::new(json!({"api_key": "fx_live_abc"}));

    assert_eq!(record.api_key(), Some("fx_live_abc"));
}

/// **VALUE**: A deleted key (empty string) reads as "no key".
///
/// **WHY THIS MATTERS**: `/user/delete-apikey` blanks the field instead of removing it; the
/// dashboard must show the empty state and re-enable "New Key".
///
/// **BUG THIS CATCHES**: Would catch `Some("")` leaking through.
#[test]
fn given_empty_key_when_api_key_then_none() {
    let record = UserRecord::new(json!({"apiKey": ""}));

    assert_eq!(record.api_key(), None);
}

#[test]
fn given_record_when_round_tripped_then_unknown_fields_survive() {
    let raw = json!({"name": "Ada", "createdAt": "2025-01-01", "nested": {"x": 1}});

    let record: UserRecord = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&record).unwrap(), raw);
}
