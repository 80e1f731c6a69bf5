//! Test helpers: a mocked Finoxa backend and canned responses.

use client_core::ApiClient;

use common::RedactedSecret;

use serde_json::{Value, json};
use wiremock::MockServer;
use wiremock::ResponseTemplate;

pub const TEST_TOKEN: &str = "test-jwt-token";

pub async fn start_backend() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri()).expect("client for mock server");
    (server, client)
}

pub fn token() -> RedactedSecret {
    RedactedSecret::new(TEST_TOKEN)
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}

pub fn user_json(api_key: &str) -> Value {
    json!({
        "_id": "65f0c0ffee",
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "apiKey": api_key,
    })
}

/// 200 with `{status: "success", data}`.
pub fn success(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"status": "success", "data": data}))
}

/// 200 that also sets the `token` cookie, like signup and login.
pub fn success_with_cookie(data: Value) -> ResponseTemplate {
    success(data).insert_header("set-cookie", format!("token={TEST_TOKEN}; Path=/; HttpOnly"))
}

/// Error envelope `{status: "error", message}` with the given status.
pub fn failure(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({"status": "error", "message": message}))
}
