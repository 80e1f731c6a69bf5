// Unit tests for page-local state: form fields, key preview, transient flags

use crate::ApiClient;
use crate::pages::dashboard::{EMPTY_KEY_TEXT, KEY_PREVIEW_LENGTH, key_preview};
use crate::pages::{
    DashboardPage, KeyPanel, LoginPage, SignupPage, TRANSIENT_FLAG_DURATION, TransientFlag,
};
use crate::stores::{AuthState, AuthStore, UserState};

use models::{RequestStatus, UserRecord};

use std::time::Duration;

use serde_json::json;

fn user_with_key(key: &str) -> UserState {
    UserState {
        success: Some(true),
        message: None,
        data: Some(UserRecord::new(json!({"email": "ada@example.com", "apiKey": key}))),
        is_loading: false,
    }
}

// ============================================
// Dashboard key panel
// ============================================

/// **VALUE**: The preview shows 25 characters and an ellipsis, never the full key.
///
/// **WHY THIS MATTERS**: The dashboard must not reveal the whole credential on screen.
///
/// **BUG THIS CATCHES**: Off-by-one in the preview length, or slicing bytes instead of
/// characters (which panics on multi-byte input).
#[test]
fn given_long_key_when_previewed_then_first_25_chars_then_ellipsis() {
    let key = "fx_live_0123456789abcdefghijklmnopqrstuvwxyz";

    let preview = key_preview(key);

    assert_eq!(preview, "fx_live_0123456789abcdefg...");
    assert_eq!(preview.chars().count(), KEY_PREVIEW_LENGTH + 3);
}

#[test]
fn given_short_key_when_previewed_then_whole_key_then_ellipsis() {
    assert_eq!(key_preview("abc"), "abc...");
}

/// **VALUE**: "New Key" is disabled exactly while a key exists.
///
/// **WHY THIS MATTERS**: The backend keeps one key per user; offering "New Key" next to an
/// existing one would silently replace it.
///
/// **BUG THIS CATCHES**: Would catch the condition being inverted.
#[test]
fn given_existing_key_when_viewing_dashboard_then_new_key_disabled() {
    let page = DashboardPage::new();

    let view = page.view(&user_with_key("fx_live_key_value"));

    assert!(!view.can_create_key);
    assert!(matches!(view.key, KeyPanel::Key { ref preview, .. } if preview == "fx_live_key_value..."));
}

#[test]
fn given_no_key_when_viewing_dashboard_then_empty_panel_and_new_key_enabled() {
    let page = DashboardPage::new();

    let view = page.view(&UserState::default());

    assert!(view.can_create_key);
    assert_eq!(view.key, KeyPanel::Empty { text: EMPTY_KEY_TEXT });
    assert_eq!(view.product_name, "Finoxa API");
    assert_eq!(view.docs_url, "https://finoxa-api.apidog.io/");
}

#[test]
fn given_store_error_message_when_viewing_dashboard_then_not_displayed() {
    let page = DashboardPage::new();
    let state = UserState {
        success: Some(false),
        message: Some("Unauthorized - token expired".to_string()),
        ..user_with_key("fx_live_key_value")
    };

    let view = page.view(&state);

    assert_eq!(view.verification, None);
}

/// **VALUE**: Copy returns the full key once, then is disabled for one second.
///
/// **WHY THIS MATTERS**: Mirrors the copy button's "copied" state so repeated presses do
/// nothing until it resets.
///
/// **BUG THIS CATCHES**: Would catch the reset timer never firing (button stuck disabled).
#[tokio::test(start_paused = true)]
async fn given_key_when_copied_twice_then_second_copy_ignored_until_reset() {
    let page = DashboardPage::new();
    let state = user_with_key("fx_live_full_key");

    assert_eq!(page.copy_key(&state).as_deref(), Some("fx_live_full_key"));
    assert_eq!(page.copy_key(&state), None);
    assert!(matches!(
        page.view(&state).key,
        KeyPanel::Key { is_copying: true, .. }
    ));

    tokio::time::sleep(TRANSIENT_FLAG_DURATION + Duration::from_millis(10)).await;

    assert_eq!(page.copy_key(&state).as_deref(), Some("fx_live_full_key"));
}

#[tokio::test]
async fn given_no_key_when_copied_then_none() {
    let page = DashboardPage::new();

    assert_eq!(page.copy_key(&UserState::default()), None);
}

#[tokio::test(start_paused = true)]
async fn given_transient_flag_when_triggered_then_resets_after_duration() {
    let flag = TransientFlag::default();

    assert!(flag.trigger());
    assert!(flag.is_active());
    assert!(!flag.trigger(), "second trigger while active is refused");

    tokio::time::sleep(TRANSIENT_FLAG_DURATION + Duration::from_millis(10)).await;

    assert!(!flag.is_active());
}

// ============================================
// Signup and login forms
// ============================================

#[test]
fn given_signup_page_when_fields_set_by_name_then_form_updates() {
    let mut page = SignupPage::new();

    assert!(page.set_field("name", "Ada"));
    assert!(page.set_field("email", "ada@example.com"));
    assert!(page.set_field("password", "secret1"));
    assert!(!page.set_field("apiKey", "nope"));

    assert_eq!(page.form().name, "Ada");
    assert_eq!(page.form().email, "ada@example.com");
    assert_eq!(page.form().password, "secret1");
}

#[test]
fn given_login_page_when_name_field_set_then_rejected() {
    let mut page = LoginPage::new();

    assert!(!page.set_field("name", "Ada"));
    assert!(page.set_field("email", "ada@example.com"));
}

/// **VALUE**: The signup page shows the store's status as an alert with a capitalised
/// title.
///
/// **WHY THIS MATTERS**: This is the only place request errors reach the user.
///
/// **BUG THIS CATCHES**: Would catch the alert being keyed off `message` instead of
/// `status`, hiding errors whose body had no message.
#[test]
fn given_error_status_when_viewing_signup_then_alert_shows_title_and_message() {
    let page = SignupPage::new();
    let auth = AuthState {
        status: Some(RequestStatus::Error),
        message: Some("User is already exists".to_string()),
        ..AuthState::default()
    };

    let view = page.view(&auth);

    let alert = view.alert.expect("alert");
    assert_eq!(alert.title, "Error");
    assert_eq!(alert.description, "User is already exists");
    assert_eq!(view.link.to, "/login");
}

#[test]
fn given_no_status_when_viewing_signup_then_no_alert() {
    let view = SignupPage::new().view(&AuthState::default());

    assert!(view.alert.is_none());
}

/// **VALUE**: An invalid form is rejected locally and never reaches the network.
///
/// **WHY THIS MATTERS**: Mirrors browser form validation; the store must not flip into
/// loading or error state for a form the user has not finished.
///
/// **BUG THIS CATCHES**: Would catch submit calling the store before validating.
#[tokio::test]
async fn given_short_password_when_login_submitted_then_store_untouched() {
    // Port 9 (discard) is never contacted because validation fails first
    let auth = AuthStore::new(ApiClient::new("http://127.0.0.1:9").unwrap());
    let mut page = LoginPage::new();
    page.set_field("email", "ada@example.com");
    page.set_field("password", "123");

    let navigation = page.submit(&auth).await;

    assert!(navigation.is_none());
    assert_eq!(auth.snapshot().await, AuthState::default());
    let view = page.view(&auth.snapshot().await);
    assert_eq!(view.field_error.map(|e| e.field), Some("password"));
}
