//! Authentication store: signup, login, logout and the startup session check.

use crate::api_client::ApiClient;
use crate::error::api_client::ApiClientError;
use crate::stores::StoreCell;

use common::RedactedSecret;
use models::{ApiEnvelope, LoginRequest, RequestStatus, SignupRequest, UserRecord};

use log::{debug, info, warn};
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub status: Option<RequestStatus>,
    pub message: Option<String>,
    pub data: Option<UserRecord>,
    pub is_authenticated: bool,
    pub is_checking_auth: bool,
    pub is_loading: bool,
}

#[derive(Clone)]
pub struct AuthStore {
    client: ApiClient,
    cell: StoreCell<AuthState>,
}

impl AuthStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cell: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> AuthState {
        self.cell.snapshot().await
    }

    /// Receiver that changes after every state mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cell.subscribe()
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) {
        self.begin_request().await;
        let request = SignupRequest::new(name, email, password);
        let result = self.client.signup(&request).await;
        self.finish_credentials_request("signup", result).await;
    }

    pub async fn login(&self, email: &str, password: &str) {
        self.begin_request().await;
        let request = LoginRequest::new(email, password);
        let result = self.client.login(&request).await;
        self.finish_credentials_request("login", result).await;
    }

    /// End the session. Status and message are not reset beforehand.
    ///
    /// On failure the auth flag is left as it was.
    pub async fn logout(&self) {
        match self.client.logout().await {
            Ok(envelope) => {
                info!("Logged out");
                self.cell
                    .set(|state| {
                        state.status = Some(RequestStatus::Success);
                        state.data = envelope.user();
                        state.is_authenticated = false;
                    })
                    .await;
            }
            Err(e) => {
                warn!("Logout failed: {e}");
                self.record_error(&e).await;
            }
        }
    }

    /// Rebuild the auth flag from the saved token.
    ///
    /// Every failure, including a missing token, just marks the session
    /// unauthenticated; status and message are left untouched.
    pub async fn check_auth(&self, token: Option<&RedactedSecret>) {
        self.cell.set(|state| state.is_checking_auth = true).await;

        let Some(token) = token else {
            debug!("No token cookie present, skipping check-auth");
            self.mark_unauthenticated().await;
            return;
        };

        match self.client.check_auth(token).await {
            Ok(envelope) => {
                info!("Session check succeeded");
                self.cell
                    .set(|state| {
                        state.status = Some(RequestStatus::Success);
                        state.data = envelope.user();
                        state.is_authenticated = true;
                        state.is_checking_auth = false;
                    })
                    .await;
            }
            Err(e) => {
                debug!("Session check failed: {e}");
                self.mark_unauthenticated().await;
            }
        }
    }

    async fn begin_request(&self) {
        self.cell
            .set(|state| {
                state.is_loading = true;
                state.status = None;
                state.message = None;
            })
            .await;
    }

    async fn finish_credentials_request(
        &self,
        action: &str,
        result: Result<ApiEnvelope, ApiClientError>,
    ) {
        match result {
            Ok(envelope) => {
                info!("{action} succeeded");
                self.cell
                    .set(|state| {
                        state.status = Some(RequestStatus::Success);
                        state.data = envelope.user();
                        state.is_authenticated = true;
                        state.is_loading = false;
                    })
                    .await;
            }
            Err(e) => {
                warn!("{action} failed: {e}");
                self.record_error(&e).await;
            }
        }
    }

    async fn record_error(&self, error: &ApiClientError) {
        let message = error.display_message().to_string();
        self.cell
            .set(|state| {
                state.status = Some(RequestStatus::Error);
                state.message = Some(message);
                state.is_loading = false;
            })
            .await;
    }

    async fn mark_unauthenticated(&self) {
        self.cell
            .set(|state| {
                state.is_authenticated = false;
                state.is_checking_auth = false;
            })
            .await;
    }
}
