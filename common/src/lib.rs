//! Shared primitives for the Finoxa console.
//!
//! Everything here is dependency-light and used by every other crate:
//! error locations, HTTP status classification, and a wrapper that keeps
//! secrets (session tokens, API keys) out of logs.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error plumbing and secret handling
//! - **models**: Wire and domain data
//! - **client-core**: API client, stores, router and page controllers
//! - **finoxa**: Terminal application wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
