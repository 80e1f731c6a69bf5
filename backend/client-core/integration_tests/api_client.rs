use crate::helpers::{
    TEST_TOKEN, bearer, failure, start_backend, success, success_with_cookie, token,
};

use client_core::ApiClient;
use client_core::error::api_client::ApiClientError;

use models::{LoginRequest, SignupRequest};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Signup posts the exact JSON body the backend schema expects.
///
/// **WHY THIS MATTERS**: The backend validates `{name, email, password}`; a renamed field
/// turns every signup into a 422.
///
/// **BUG THIS CATCHES**: Would catch serde renames or missing fields on the request.
#[tokio::test]
async fn given_signup_request_when_sent_then_posts_json_body() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "secret1"
        })))
        .respond_with(success(json!({"email": "ada@example.com"})))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client
        .signup(&SignupRequest::new("Ada", "ada@example.com", "secret1"))
        .await
        .unwrap();

    let user = envelope.user().expect("user record");
    assert_eq!(user.email(), Some("ada@example.com"));
}

/// **VALUE**: The cookie set by login is stored and readable as the session token.
///
/// **WHY THIS MATTERS**: Every protected call reads this cookie for its Bearer header.
///
/// **BUG THIS CATCHES**: Would catch the client being built without the cookie jar.
#[tokio::test]
async fn given_login_sets_cookie_when_reading_token_then_cookie_value_returned() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(success_with_cookie(json!({})))
        .mount(&server)
        .await;

    client
        .login(&LoginRequest::new("ada@example.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(client.token_cookie().unwrap().as_str(), TEST_TOKEN);
}

/// **VALUE**: Logout's expired cookie removes the token from the jar.
///
/// **WHY THIS MATTERS**: A stale token would be persisted and replayed at next startup.
///
/// **BUG THIS CATCHES**: Would catch Max-Age=0 cookies being ignored.
#[tokio::test]
async fn given_logout_expires_cookie_when_reading_token_then_none() {
    let (server, client) = start_backend().await;
    client.restore_token_cookie(&token());
    Mock::given(method("GET"))
        .and(path("/auth/logout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "message": "Logged out successfully"}))
                .insert_header("set-cookie", "token=\"\"; Max-Age=0; Path=/"),
        )
        .mount(&server)
        .await;

    client.logout().await.unwrap();

    assert!(client.token_cookie().is_none());
}

#[tokio::test]
async fn given_protected_call_when_sent_then_bearer_header_attached() {
    let (server, client) = start_backend().await;
    Mock::given(method("DELETE"))
        .and(path("/user/delete-apikey"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(success(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_api_key(&token()).await.unwrap();
}

/// **VALUE**: Non-2xx responses become `Server` errors carrying the backend's message.
///
/// **WHY THIS MATTERS**: The message is what the signup page shows.
///
/// **BUG THIS CATCHES**: Would catch a 4xx being treated as success because the body
/// parsed, or the status code being lost.
#[tokio::test]
async fn given_401_with_message_when_sent_then_server_error_with_message() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(failure(401, "Invalid credentials"))
        .mount(&server)
        .await;

    let err = client
        .login(&LoginRequest::new("ada@example.com", "wrong-pass"))
        .await
        .unwrap_err();

    assert_eq!(err.display_message(), "Invalid credentials");
    assert!(err.status_code().unwrap().is_unauthorized());
}

#[tokio::test]
async fn given_error_without_json_body_when_sent_then_status_text_used() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client.get_user(&token()).await.unwrap_err();

    assert_eq!(err.display_message(), "HTTP 502");
}

#[tokio::test]
async fn given_success_with_invalid_json_when_sent_then_json_error() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.get_user(&token()).await.unwrap_err();

    assert!(matches!(err, ApiClientError::Json { .. }));
}

/// **VALUE**: A base URL with a path prefix keeps the prefix on every endpoint.
///
/// **WHY THIS MATTERS**: Backends are often mounted under `/api`; `Url::join` drops the
/// last segment unless it ends in a slash.
///
/// **BUG THIS CATCHES**: Would catch requests going to `/auth/check-auth` instead of
/// `/api/auth/check-auth`.
#[tokio::test]
async fn given_base_url_with_prefix_when_sent_then_prefix_preserved() {
    let (server, _) = start_backend().await;
    let client = ApiClient::new(&format!("{}/api", server.uri())).unwrap();
    Mock::given(method("GET"))
        .and(path("/api/auth/check-auth"))
        .respond_with(success(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.check_auth(&token()).await.unwrap();
}

#[tokio::test]
async fn given_unreachable_backend_when_sent_then_http_error() {
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();

    let err = client.logout().await.unwrap_err();

    assert!(matches!(err, ApiClientError::Http { .. }));
}
