//! User store: the signed-in user's record and API key lifecycle.

use crate::api_client::ApiClient;
use crate::error::api_client::ApiClientError;
use crate::stores::StoreCell;

use common::RedactedSecret;
use models::UserRecord;

use log::{info, warn};
use tokio::sync::watch;

const NO_TOKEN_MESSAGE: &str = "Unauthorized - No token provided";
const NO_API_KEY_MESSAGE: &str = "No API key to verify";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub data: Option<UserRecord>,
    pub is_loading: bool,
}

impl UserState {
    pub fn api_key(&self) -> Option<&str> {
        self.data.as_ref().and_then(UserRecord::api_key)
    }
}

#[derive(Clone)]
pub struct UserStore {
    client: ApiClient,
    cell: StoreCell<UserState>,
}

impl UserStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cell: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> UserState {
        self.cell.snapshot().await
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cell.subscribe()
    }

    pub async fn get_user(&self, token: Option<&RedactedSecret>) {
        self.begin_request().await;

        let result = match token {
            Some(token) => self.client.get_user(token).await,
            None => Err(ApiClientError::missing_token(NO_TOKEN_MESSAGE)),
        };

        match result {
            Ok(envelope) => {
                self.cell
                    .set(|state| {
                        state.success = Some(true);
                        state.data = envelope.user();
                        state.is_loading = false;
                    })
                    .await;
            }
            Err(e) => {
                warn!("Fetching user failed: {e}");
                self.record_error(&e).await;
            }
        }
    }

    /// Issue a new key (replacing any existing one), then refresh the user.
    pub async fn generate_api_key(&self, token: Option<&RedactedSecret>) {
        self.begin_request().await;

        let result = match token {
            Some(token) => self.client.generate_api_key(token).await,
            None => Err(ApiClientError::missing_token(NO_TOKEN_MESSAGE)),
        };

        match result {
            Ok(_) => {
                info!("API key generated");
                self.get_user(token).await;
            }
            Err(e) => {
                warn!("Generating API key failed: {e}");
                self.record_error(&e).await;
            }
        }
    }

    /// Remove the key, then refresh the user. No reset beforehand.
    pub async fn delete_api_key(&self, token: Option<&RedactedSecret>) {
        let result = match token {
            Some(token) => self.client.delete_api_key(token).await,
            None => Err(ApiClientError::missing_token(NO_TOKEN_MESSAGE)),
        };

        match result {
            Ok(_) => {
                info!("API key deleted");
                self.get_user(token).await;
            }
            Err(e) => {
                warn!("Deleting API key failed: {e}");
                self.record_error(&e).await;
            }
        }
    }

    /// Check the current key against the backend.
    pub async fn verify_api_key(&self) {
        let api_key = self
            .snapshot()
            .await
            .api_key()
            .map(RedactedSecret::new);

        self.begin_request().await;

        let result = match api_key {
            Some(ref key) => self.client.verify_api_key(key).await,
            None => Err(ApiClientError::missing_token(NO_API_KEY_MESSAGE)),
        };

        match result {
            Ok(envelope) => {
                info!("API key verified");
                let message = envelope.message;
                self.cell
                    .set(|state| {
                        state.success = Some(true);
                        state.message = message;
                        state.is_loading = false;
                    })
                    .await;
            }
            Err(e) => {
                warn!("Verifying API key failed: {e}");
                self.record_error(&e).await;
            }
        }
    }

    async fn begin_request(&self) {
        self.cell
            .set(|state| {
                state.is_loading = true;
                state.success = None;
                state.message = None;
            })
            .await;
    }

    async fn record_error(&self, error: &ApiClientError) {
        let message = error.display_message().to_string();
        self.cell
            .set(|state| {
                state.success = Some(false);
                state.message = Some(message);
                state.is_loading = false;
            })
            .await;
    }
}
