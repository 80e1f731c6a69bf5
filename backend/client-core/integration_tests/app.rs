use crate::helpers::{TEST_TOKEN, failure, start_backend, success, success_with_cookie, user_json};

use client_core::pages::{KeyPanel, TRANSIENT_FLAG_DURATION};
use client_core::session::SessionFile;
use client_core::{Action, ApiClient, App, Outcome, View};

use common::RedactedSecret;

use std::time::Duration;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "fnx_0123456789abcdefghijklmnopqrstuvwxyz";

fn set(name: &str, value: &str) -> Action {
    Action::SetField {
        name: name.to_string(),
        value: value.to_string(),
    }
}

async fn mount_login_and_user(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(success_with_cookie(json!({"email": "ada@example.com"})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(success(user_json(API_KEY)))
        .mount(server)
        .await;
}

async fn log_in(app: &mut App) {
    app.dispatch(set("email", "ada@example.com")).await.unwrap();
    app.dispatch(set("password", "secret1")).await.unwrap();
    app.dispatch(Action::Submit).await.unwrap();
}

/// **VALUE**: A fresh start on `/` with no session lands on the login page.
///
/// **WHY THIS MATTERS**: The dashboard is protected; an anonymous user must never see it.
///
/// **BUG THIS CATCHES**: Would catch the guard redirect being pushed instead of replacing.
#[tokio::test]
async fn given_no_session_when_boot_at_root_then_login_shown() {
    let (_server, client) = start_backend().await;
    let mut app = App::new(client, None);

    app.boot("/").await.unwrap();

    assert!(matches!(app.view().await, View::Login(_)));
    assert_eq!(app.router().current_path(), "/login");
    assert_eq!(app.router().history().entries().len(), 1);
}

#[tokio::test]
async fn given_unknown_path_when_boot_then_not_found_view() {
    let (_server, client) = start_backend().await;
    let mut app = App::new(client, None);

    app.boot("/settings").await.unwrap();

    assert_eq!(
        app.view().await,
        View::NotFound {
            path: "/settings".to_string()
        }
    );
}

/// **VALUE**: Logging in moves to the dashboard and shows the key preview.
///
/// **WHY THIS MATTERS**: This is the main flow of the application.
///
/// **BUG THIS CATCHES**: Would catch the dashboard mounting before the cookie is read, or
/// the preview leaking the full key.
#[tokio::test]
async fn given_login_page_when_valid_credentials_submitted_then_dashboard_shows_key() {
    let (server, client) = start_backend().await;
    mount_login_and_user(&server).await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();

    log_in(&mut app).await;

    assert_eq!(app.router().current_path(), "/");
    let View::Dashboard(view) = app.view().await else {
        panic!("expected dashboard");
    };
    assert!(!view.can_create_key);
    let KeyPanel::Key { preview, .. } = view.key else {
        panic!("expected key panel");
    };
    assert_eq!(preview, format!("{}...", &API_KEY[..25]));
}

#[tokio::test]
async fn given_invalid_email_when_submitted_then_stays_on_login_without_request() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(success_with_cookie(json!({})))
        .expect(0)
        .mount(&server)
        .await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();

    app.dispatch(set("email", "not-an-email")).await.unwrap();
    app.dispatch(set("password", "secret1")).await.unwrap();
    app.dispatch(Action::Submit).await.unwrap();

    let View::Login(view) = app.view().await else {
        panic!("expected login");
    };
    assert_eq!(view.field_error.unwrap().field, "email");
}

#[tokio::test]
async fn given_rejected_signup_when_submitted_then_alert_shown() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(failure(400, "User already exists"))
        .mount(&server)
        .await;
    let mut app = App::new(client, None);
    app.boot("/signup").await.unwrap();

    app.dispatch(set("name", "Ada")).await.unwrap();
    app.dispatch(set("email", "ada@example.com")).await.unwrap();
    app.dispatch(set("password", "secret1")).await.unwrap();
    app.dispatch(Action::Submit).await.unwrap();

    let View::Signup(view) = app.view().await else {
        panic!("expected signup");
    };
    let alert = view.alert.unwrap();
    assert_eq!(alert.title, "Error");
    assert_eq!(alert.description, "User already exists");
}

#[tokio::test]
async fn given_dashboard_when_copy_then_full_key_returned() {
    let (server, client) = start_backend().await;
    mount_login_and_user(&server).await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();
    log_in(&mut app).await;

    let outcome = app.dispatch(Action::CopyKey).await.unwrap();

    assert_eq!(outcome, Outcome::Copy(API_KEY.to_string()));
}

#[tokio::test]
async fn given_login_page_when_dashboard_action_then_ignored() {
    let (_server, client) = start_backend().await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();

    let outcome = app.dispatch(Action::DeleteKey).await.unwrap();

    assert_eq!(outcome, Outcome::Ignored);
}

/// **VALUE**: Logout returns to `/login` and removes the saved session.
///
/// **WHY THIS MATTERS**: A leftover session file would sign the user back in at next start.
///
/// **BUG THIS CATCHES**: Would catch the session file surviving logout.
#[tokio::test]
async fn given_dashboard_when_logout_then_login_shown_and_session_cleared() {
    let (server, client) = start_backend().await;
    mount_login_and_user(&server).await;
    Mock::given(method("GET"))
        .and(path("/auth/logout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "message": "Logged out successfully"}))
                .insert_header("set-cookie", "token=; Max-Age=0; Path=/"),
        )
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let session = SessionFile::in_dir(dir.path());
    let mut app = App::new(client, Some(session.clone()));
    app.boot("/login").await.unwrap();
    log_in(&mut app).await;
    assert!(session.path().exists());

    app.dispatch(Action::Logout).await.unwrap();

    assert!(matches!(app.view().await, View::Login(_)));
    assert!(session.load().unwrap().is_none());
}

/// **VALUE**: A saved session signs the user straight into the dashboard on next start.
///
/// **WHY THIS MATTERS**: This is the terminal equivalent of a browser keeping its cookie.
///
/// **BUG THIS CATCHES**: Would catch the restored cookie not being sent with check-auth.
#[tokio::test]
async fn given_saved_session_when_boot_then_dashboard_shown() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/auth/check-auth"))
        .respond_with(success(json!({"email": "ada@example.com"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(success(user_json(API_KEY)))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let session = SessionFile::in_dir(dir.path());
    session.save(&RedactedSecret::new(TEST_TOKEN)).unwrap();
    let mut app = App::new(client, Some(session));

    app.boot("/").await.unwrap();

    assert!(matches!(app.view().await, View::Dashboard(_)));
}

#[tokio::test]
async fn given_corrupt_session_when_boot_then_login_shown() {
    let (_server, client) = start_backend().await;
    let dir = TempDir::new().unwrap();
    let session = SessionFile::in_dir(dir.path());
    std::fs::write(session.path(), "{not json").unwrap();
    let mut app = App::new(client, Some(session));

    app.boot("/").await.unwrap();

    assert!(matches!(app.view().await, View::Login(_)));
}

#[tokio::test]
async fn given_signed_in_when_navigating_to_signup_then_redirected_home() {
    let (server, client) = start_backend().await;
    mount_login_and_user(&server).await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();
    log_in(&mut app).await;

    app.dispatch(Action::Navigate("/signup".to_string()))
        .await
        .unwrap();

    assert_eq!(app.router().current_path(), "/");
    assert!(matches!(app.view().await, View::Dashboard(_)));
}

#[tokio::test]
async fn given_unreachable_backend_when_boot_with_session_then_login_shown() {
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let dir = TempDir::new().unwrap();
    let session = SessionFile::in_dir(dir.path());
    session.save(&RedactedSecret::new(TEST_TOKEN)).unwrap();
    let mut app = App::new(client, Some(session));

    app.boot("/").await.unwrap();

    assert!(matches!(app.view().await, View::Login(_)));
}

async fn mount_login_with_user(server: &MockServer, user: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(success_with_cookie(json!({"email": "ada@example.com"})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(user)
        .mount(server)
        .await;
}

/// **VALUE**: A valid signup signs the user in and lands on the dashboard.
///
/// **WHY THIS MATTERS**: Signup is the first thing a new user does; it must not leave them
/// on the form after the backend accepted the account.
///
/// **BUG THIS CATCHES**: Would catch the post-submit navigation reading the auth flag
/// before the store updated it.
#[tokio::test]
async fn given_signup_page_when_valid_account_submitted_then_dashboard_shown() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(success_with_cookie(json!({"email": "ada@example.com"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(success(user_json("")))
        .mount(&server)
        .await;
    let mut app = App::new(client, None);
    app.boot("/signup").await.unwrap();

    app.dispatch(set("name", "Ada")).await.unwrap();
    app.dispatch(set("email", "ada@example.com")).await.unwrap();
    app.dispatch(set("password", "secret1")).await.unwrap();
    app.dispatch(Action::Submit).await.unwrap();

    assert!(app.auth().snapshot().await.is_authenticated);
    assert_eq!(app.router().current_path(), "/");
    let View::Dashboard(view) = app.view().await else {
        panic!("expected dashboard");
    };
    assert!(view.can_create_key);
}

/// **VALUE**: User store errors never show up as text on the dashboard.
///
/// **WHY THIS MATTERS**: Request messages are only displayed on the signup page; the
/// dashboard stays quiet when `/user` fails.
///
/// **BUG THIS CATCHES**: Would catch the dashboard view copying the user store's
/// `message` into what it renders.
#[tokio::test]
async fn given_user_fetch_fails_when_dashboard_shown_then_no_message_displayed() {
    let (server, client) = start_backend().await;
    mount_login_with_user(&server, failure(401, "Unauthorized - token expired")).await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();

    log_in(&mut app).await;

    assert_eq!(
        app.user().snapshot().await.message.as_deref(),
        Some("Unauthorized - token expired")
    );
    let View::Dashboard(view) = app.view().await else {
        panic!("expected dashboard");
    };
    assert_eq!(view.verification, None);
    assert!(matches!(view.key, KeyPanel::Empty { .. }));
}

/// **VALUE**: Delete and rotate do nothing while the user has no key.
///
/// **WHY THIS MATTERS**: Those actions only exist next to a key on the dashboard; sending
/// them anyway would rotate a key into existence or spam the backend.
///
/// **BUG THIS CATCHES**: Would catch the key-presence check being dropped from either
/// handler.
#[tokio::test]
async fn given_no_key_when_delete_or_rotate_then_ignored_without_request() {
    let (server, client) = start_backend().await;
    mount_login_with_user(&server, success(user_json(""))).await;
    Mock::given(method("DELETE"))
        .and(path("/user/delete-apikey"))
        .respond_with(success(json!(null)))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/user/generate-apikey"))
        .respond_with(success(json!({"apiKey": API_KEY})))
        .expect(0)
        .mount(&server)
        .await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();
    log_in(&mut app).await;

    let delete = app.dispatch(Action::DeleteKey).await.unwrap();
    let rotate = app.dispatch(Action::RotateKey).await.unwrap();
    let verify = app.dispatch(Action::VerifyKey).await.unwrap();

    assert_eq!(delete, Outcome::Ignored);
    assert_eq!(rotate, Outcome::Ignored);
    assert_eq!(verify, Outcome::Ignored);
}

#[tokio::test]
async fn given_existing_key_when_new_key_then_ignored() {
    let (server, client) = start_backend().await;
    mount_login_and_user(&server).await;
    Mock::given(method("PUT"))
        .and(path("/user/generate-apikey"))
        .respond_with(success(json!({"apiKey": API_KEY})))
        .expect(0)
        .mount(&server)
        .await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();
    log_in(&mut app).await;

    let outcome = app.dispatch(Action::NewKey).await.unwrap();

    assert_eq!(outcome, Outcome::Ignored);
}

/// **VALUE**: A second rotate while the first is still showing sends nothing; once the
/// busy state clears, rotate works again.
///
/// **WHY THIS MATTERS**: The rotate button stays busy for one second; a double press must
/// not issue two keys back to back.
///
/// **BUG THIS CATCHES**: Would catch the `is_generating` gate being bypassed, or never
/// resetting. Runs on the real clock: a paused clock auto-advances while the mock
/// server's I/O is pending and would fire the reset early.
#[tokio::test]
async fn given_key_when_rotated_twice_quickly_then_second_rotate_ignored_until_reset() {
    let (server, client) = start_backend().await;
    mount_login_and_user(&server).await;
    Mock::given(method("PUT"))
        .and(path("/user/generate-apikey"))
        .respond_with(success(json!({"apiKey": API_KEY})))
        .expect(2)
        .mount(&server)
        .await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();
    log_in(&mut app).await;

    let first = app.dispatch(Action::RotateKey).await.unwrap();
    let second = app.dispatch(Action::RotateKey).await.unwrap();

    assert_eq!(first, Outcome::None);
    assert_eq!(second, Outcome::Ignored);
    let View::Dashboard(view) = app.view().await else {
        panic!("expected dashboard");
    };
    assert!(matches!(view.key, KeyPanel::Key { is_generating: true, .. }));

    tokio::time::sleep(TRANSIENT_FLAG_DURATION + Duration::from_millis(100)).await;

    let third = app.dispatch(Action::RotateKey).await.unwrap();
    assert_eq!(third, Outcome::None);
}

#[tokio::test]
async fn given_key_when_verified_then_result_shown_on_dashboard() {
    let (server, client) = start_backend().await;
    mount_login_and_user(&server).await;
    Mock::given(method("GET"))
        .and(path("/user/verify-apikey"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "message": "API key is valid"})),
        )
        .mount(&server)
        .await;
    let mut app = App::new(client, None);
    app.boot("/login").await.unwrap();
    log_in(&mut app).await;

    app.dispatch(Action::VerifyKey).await.unwrap();

    let View::Dashboard(view) = app.view().await else {
        panic!("expected dashboard");
    };
    assert_eq!(view.verification.as_deref(), Some("API key is valid"));
}
