//! HTTP client for the Finoxa backend.
//!
//! One `reqwest::Client` per application, sharing a cookie jar so the
//! `token` cookie set by `/auth/login` and `/auth/signup` is sent back on
//! every later request, the same way `credentials: "include"` behaves.

use crate::error::api_client::ApiClientError;

use common::{HttpStatusCode, RedactedSecret};
use models::{ApiEnvelope, LoginRequest, SignupRequest};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use url::Url;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
pub const TOKEN_COOKIE_NAME: &str = "token";

const JSON_CONTENT_TYPE: &str = "application/json";
const SIGNUP_ENDPOINT: &str = "auth/signup";
const LOGIN_ENDPOINT: &str = "auth/login";
const LOGOUT_ENDPOINT: &str = "auth/logout";
const CHECK_AUTH_ENDPOINT: &str = "auth/check-auth";
const USER_ENDPOINT: &str = "user";
const GENERATE_API_KEY_ENDPOINT: &str = "user/generate-apikey";
const DELETE_API_KEY_ENDPOINT: &str = "user/delete-apikey";
const VERIFY_API_KEY_ENDPOINT: &str = "user/verify-apikey";

#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
    jar: Arc<Jar>,
}

impl ApiClient {
    /// Client with a fresh cookie jar and the default timeout.
    pub fn new(base_url_str: &str) -> Result<Self, ApiClientError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(base_url_str: &str, timeout: Duration) -> Result<Self, ApiClientError> {
        Self::with_jar(base_url_str, Arc::new(Jar::default()), timeout)
    }

    pub fn with_jar(
        base_url_str: &str,
        jar: Arc<Jar>,
        timeout: Duration,
    ) -> Result<Self, ApiClientError> {
        let mut base_url = Url::parse(base_url_str)?;

        // `Url::join` drops the last path segment unless it ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self {
            base_url,
            client,
            jar,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn signup(&self, body: &SignupRequest) -> Result<ApiEnvelope, ApiClientError> {
        let url = self.base_url.join(SIGNUP_ENDPOINT)?;
        self.execute(SIGNUP_ENDPOINT, self.client.post(url).json(body))
            .await
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<ApiEnvelope, ApiClientError> {
        let url = self.base_url.join(LOGIN_ENDPOINT)?;
        self.execute(LOGIN_ENDPOINT, self.client.post(url).json(body))
            .await
    }

    pub async fn logout(&self) -> Result<ApiEnvelope, ApiClientError> {
        let url = self.base_url.join(LOGOUT_ENDPOINT)?;
        self.execute(LOGOUT_ENDPOINT, self.client.get(url)).await
    }

    pub async fn check_auth(&self, token: &RedactedSecret) -> Result<ApiEnvelope, ApiClientError> {
        let url = self.base_url.join(CHECK_AUTH_ENDPOINT)?;
        let request = with_bearer(self.client.get(url), token);
        self.execute(CHECK_AUTH_ENDPOINT, request).await
    }

    pub async fn get_user(&self, token: &RedactedSecret) -> Result<ApiEnvelope, ApiClientError> {
        let url = self.base_url.join(USER_ENDPOINT)?;
        let request = with_bearer(self.client.get(url), token).header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        self.execute(USER_ENDPOINT, request).await
    }

    pub async fn generate_api_key(
        &self,
        token: &RedactedSecret,
    ) -> Result<ApiEnvelope, ApiClientError> {
        let url = self.base_url.join(GENERATE_API_KEY_ENDPOINT)?;
        let request = with_bearer(self.client.put(url), token).header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        self.execute(GENERATE_API_KEY_ENDPOINT, request).await
    }

    pub async fn delete_api_key(
        &self,
        token: &RedactedSecret,
    ) -> Result<ApiEnvelope, ApiClientError> {
        let url = self.base_url.join(DELETE_API_KEY_ENDPOINT)?;
        let request =
            with_bearer(self.client.delete(url), token).header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        self.execute(DELETE_API_KEY_ENDPOINT, request).await
    }

    /// Ask the backend whether `api_key` is a live key.
    ///
    /// The backend accepts the key as a Bearer credential on this route.
    pub async fn verify_api_key(
        &self,
        api_key: &RedactedSecret,
    ) -> Result<ApiEnvelope, ApiClientError> {
        let url = self.base_url.join(VERIFY_API_KEY_ENDPOINT)?;
        let request = with_bearer(self.client.get(url), api_key);
        self.execute(VERIFY_API_KEY_ENDPOINT, request).await
    }

    /// Read the `token` cookie the backend set for this origin.
    pub fn token_cookie(&self) -> Option<RedactedSecret> {
        let header = self.jar.cookies(&self.base_url)?;
        let cookies = header.to_str().ok()?;
        find_cookie(cookies, TOKEN_COOKIE_NAME).map(RedactedSecret::new)
    }

    /// Put a previously saved `token` cookie back into the jar.
    pub fn restore_token_cookie(&self, token: &RedactedSecret) {
        let cookie = format!("{TOKEN_COOKIE_NAME}={}; Path=/", token.as_str());
        self.jar.add_cookie_str(&cookie, &self.base_url);
    }

    async fn execute(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<ApiEnvelope, ApiClientError> {
        debug!("Sending request to /{endpoint}");

        let response = request.send().await?;
        let status_code = HttpStatusCode(response.status().as_u16());
        let body = response.text().await?;

        if !status_code.is_success() {
            let envelope: ApiEnvelope = serde_json::from_str(&body).unwrap_or_default();
            let message = envelope
                .error_text()
                .unwrap_or_else(|| format!("HTTP {status_code}"));
            if status_code.is_client_error() {
                info!("/{endpoint} rejected with HTTP {status_code}: {message}");
            } else if status_code.is_server_error() {
                error!("/{endpoint} failed with HTTP {status_code}: {message}");
            } else {
                warn!("/{endpoint} returned HTTP {status_code}: {message}");
            }
            return Err(ApiClientError::server(status_code, message));
        }

        debug!("/{endpoint} succeeded with HTTP {status_code}");
        let envelope: ApiEnvelope = serde_json::from_str(&body)?;
        Ok(envelope)
    }
}

fn with_bearer(request: RequestBuilder, token: &RedactedSecret) -> RequestBuilder {
    request.header(AUTHORIZATION, format!("Bearer {}", token.as_str()))
}

/// Find `name` in a `Cookie` header value (`a=1; b=2`).
///
/// Surrounding double quotes are stripped, and blank values count as absent.
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
        .filter(|value| !value.is_empty())
}
