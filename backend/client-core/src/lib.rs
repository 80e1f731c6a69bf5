pub mod api_client;
pub mod app;
pub mod config;
pub mod error;
pub mod pages;
pub mod router;
pub mod session;
pub mod stores;

#[cfg(test)]
mod tests;

pub use api_client::ApiClient;
pub use app::{Action, App, Outcome, View};
