pub mod api_client;
pub mod config;
pub mod router;
pub mod session;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    ApiClient(#[from] api_client::ApiClientError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Session(#[from] session::SessionError),

    #[error(transparent)]
    Router(#[from] router::RouterError),
}
