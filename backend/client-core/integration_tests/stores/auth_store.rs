use crate::helpers::{bearer, failure, start_backend, success, success_with_cookie, token};

use client_core::stores::AuthStore;

use models::RequestStatus;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: A successful login flips the auth flag and stores the returned user.
///
/// **WHY THIS MATTERS**: The router's guards read this flag to leave `/login`.
///
/// **BUG THIS CATCHES**: Would catch `is_loading` staying true after success.
#[tokio::test]
async fn given_valid_credentials_when_login_then_authenticated_with_user() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(success_with_cookie(json!({"email": "ada@example.com"})))
        .mount(&server)
        .await;
    let store = AuthStore::new(client);

    store.login("ada@example.com", "secret1").await;

    let state = store.snapshot().await;
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.status, Some(RequestStatus::Success));
    assert_eq!(state.data.unwrap().email(), Some("ada@example.com"));
}

/// **VALUE**: A rejected signup records the backend message as an error.
///
/// **WHY THIS MATTERS**: The signup page shows this message in its alert.
///
/// **BUG THIS CATCHES**: Would catch the auth flag being set on a failed signup.
#[tokio::test]
async fn given_existing_email_when_signup_then_error_message_recorded() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(failure(400, "User already exists"))
        .mount(&server)
        .await;
    let store = AuthStore::new(client);

    store.signup("Ada", "ada@example.com", "secret1").await;

    let state = store.snapshot().await;
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.status, Some(RequestStatus::Error));
    assert_eq!(state.message.as_deref(), Some("User already exists"));
}

#[tokio::test]
async fn given_prior_error_when_login_succeeds_then_message_cleared() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(failure(401, "Invalid credentials"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(success_with_cookie(json!({})))
        .mount(&server)
        .await;
    let store = AuthStore::new(client);

    store.login("ada@example.com", "wrong-pass").await;
    store.login("ada@example.com", "secret1").await;

    let state = store.snapshot().await;
    assert!(state.is_authenticated);
    assert!(state.message.is_none());
}

/// **VALUE**: Startup with no saved token skips the network and settles unauthenticated.
///
/// **WHY THIS MATTERS**: The app shows a loading screen until `is_checking_auth` clears.
///
/// **BUG THIS CATCHES**: Would catch a stuck loading screen or a check-auth call with an
/// empty Bearer header.
#[tokio::test]
async fn given_no_token_when_check_auth_then_unauthenticated_without_request() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/auth/check-auth"))
        .respond_with(success(json!({})))
        .expect(0)
        .mount(&server)
        .await;
    let store = AuthStore::new(client);

    store.check_auth(None).await;

    let state = store.snapshot().await;
    assert!(!state.is_authenticated);
    assert!(!state.is_checking_auth);
}

#[tokio::test]
async fn given_valid_token_when_check_auth_then_authenticated() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/auth/check-auth"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(success(json!({"email": "ada@example.com"})))
        .mount(&server)
        .await;
    let store = AuthStore::new(client);

    store.check_auth(Some(&token())).await;

    let state = store.snapshot().await;
    assert!(state.is_authenticated);
    assert!(!state.is_checking_auth);
}

/// **VALUE**: A failed session check is silent.
///
/// **WHY THIS MATTERS**: An expired token at startup should just land on the login page,
/// not show an error alert.
///
/// **BUG THIS CATCHES**: Would catch check-auth failures writing status or message.
#[tokio::test]
async fn given_expired_token_when_check_auth_then_status_untouched() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/auth/check-auth"))
        .respond_with(failure(401, "Unauthorized - Invalid token"))
        .mount(&server)
        .await;
    let store = AuthStore::new(client);

    store.check_auth(Some(&token())).await;

    let state = store.snapshot().await;
    assert!(!state.is_authenticated);
    assert!(!state.is_checking_auth);
    assert!(state.status.is_none());
    assert!(state.message.is_none());
}

#[tokio::test]
async fn given_authenticated_when_logout_then_flag_cleared() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(success_with_cookie(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/logout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "message": "Logged out successfully"})),
        )
        .mount(&server)
        .await;
    let store = AuthStore::new(client);
    store.login("ada@example.com", "secret1").await;

    store.logout().await;

    let state = store.snapshot().await;
    assert!(!state.is_authenticated);
    assert_eq!(state.status, Some(RequestStatus::Success));
}

#[tokio::test]
async fn given_backend_down_when_logout_then_still_authenticated() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(success_with_cookie(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/logout"))
        .respond_with(failure(500, "Internal server error"))
        .mount(&server)
        .await;
    let store = AuthStore::new(client);
    store.login("ada@example.com", "secret1").await;

    store.logout().await;

    let state = store.snapshot().await;
    assert!(state.is_authenticated);
    assert_eq!(state.status, Some(RequestStatus::Error));
    assert_eq!(state.message.as_deref(), Some("Internal server error"));
}

#[tokio::test]
async fn given_subscriber_when_login_then_revision_changes() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(success_with_cookie(json!({})))
        .mount(&server)
        .await;
    let store = AuthStore::new(client);
    let mut revisions = store.subscribe();

    store.login("ada@example.com", "secret1").await;

    assert!(revisions.has_changed().unwrap());
    assert!(*revisions.borrow_and_update() >= 2);
}
