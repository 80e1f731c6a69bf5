use crate::helpers::{bearer, failure, start_backend, success, token, user_json};

use client_core::stores::UserStore;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

const API_KEY: &str = "fnx_0123456789abcdefghijklmnopqrstuvwxyz";

#[tokio::test]
async fn given_token_when_get_user_then_record_stored() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(success(user_json(API_KEY)))
        .mount(&server)
        .await;
    let store = UserStore::new(client);

    store.get_user(Some(&token())).await;

    let state = store.snapshot().await;
    assert_eq!(state.success, Some(true));
    assert!(!state.is_loading);
    assert_eq!(state.api_key(), Some(API_KEY));
}

/// **VALUE**: Without a token the store fails locally with the backend's wording.
///
/// **WHY THIS MATTERS**: The dashboard can be mounted before the cookie exists; the call
/// must not go out with a blank Bearer header.
///
/// **BUG THIS CATCHES**: Would catch a request being sent with `Bearer ` and no token.
#[tokio::test]
async fn given_no_token_when_get_user_then_unauthorized_without_request() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(success(user_json(API_KEY)))
        .expect(0)
        .mount(&server)
        .await;
    let store = UserStore::new(client);

    store.get_user(None).await;

    let state = store.snapshot().await;
    assert_eq!(state.success, Some(false));
    assert_eq!(
        state.message.as_deref(),
        Some("Unauthorized - No token provided")
    );
}

/// **VALUE**: Generating a key refreshes the user so the new key is shown.
///
/// **WHY THIS MATTERS**: The generate endpoint's response is not used for display; the
/// dashboard reads the key from the refreshed user record.
///
/// **BUG THIS CATCHES**: Would catch the refresh being skipped after rotation.
#[tokio::test]
async fn given_token_when_generate_api_key_then_user_refreshed() {
    let (server, client) = start_backend().await;
    Mock::given(method("PUT"))
        .and(path("/user/generate-apikey"))
        .respond_with(success(json!({"apiKey": API_KEY})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(success(user_json(API_KEY)))
        .expect(1)
        .mount(&server)
        .await;
    let store = UserStore::new(client);

    store.generate_api_key(Some(&token())).await;

    assert_eq!(store.snapshot().await.api_key(), Some(API_KEY));
}

#[tokio::test]
async fn given_generate_fails_when_generate_api_key_then_error_and_no_refresh() {
    let (server, client) = start_backend().await;
    Mock::given(method("PUT"))
        .and(path("/user/generate-apikey"))
        .respond_with(failure(500, "Could not generate key"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(success(user_json(API_KEY)))
        .expect(0)
        .mount(&server)
        .await;
    let store = UserStore::new(client);

    store.generate_api_key(Some(&token())).await;

    let state = store.snapshot().await;
    assert_eq!(state.success, Some(false));
    assert_eq!(state.message.as_deref(), Some("Could not generate key"));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn given_existing_key_when_delete_api_key_then_key_gone_after_refresh() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(success(user_json(API_KEY)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/user/delete-apikey"))
        .respond_with(success(json!(null)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(success(user_json("")))
        .mount(&server)
        .await;
    let store = UserStore::new(client);
    store.get_user(Some(&token())).await;
    assert!(store.snapshot().await.api_key().is_some());

    store.delete_api_key(Some(&token())).await;

    assert!(store.snapshot().await.api_key().is_none());
}

#[tokio::test]
async fn given_key_when_verify_then_key_sent_as_bearer() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(success(user_json(API_KEY)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/verify-apikey"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "message": "API key is valid"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let store = UserStore::new(client);
    store.get_user(Some(&token())).await;

    store.verify_api_key().await;

    let state = store.snapshot().await;
    assert_eq!(state.success, Some(true));
    assert_eq!(state.message.as_deref(), Some("API key is valid"));
    assert_eq!(state.api_key(), Some(API_KEY));
}

#[tokio::test]
async fn given_no_key_when_verify_then_local_error() {
    let (_server, client) = start_backend().await;
    let store = UserStore::new(client);

    store.verify_api_key().await;

    let state = store.snapshot().await;
    assert_eq!(state.success, Some(false));
    assert_eq!(state.message.as_deref(), Some("No API key to verify"));
}
