//! Domain models for the Finoxa console.
//!
//! Pure data: request bodies, the backend's response envelope, the opaque
//! user record, and the request status shown by the stores. Models carry
//! no I/O. Form validation lives here because it only inspects the data.

pub mod auth;
pub mod envelope;
pub mod error;
pub mod request_status;
pub mod user_record;

#[cfg(test)]
mod tests;

pub use auth::{LoginRequest, SignupRequest};
pub use envelope::ApiEnvelope;
pub use error::model_error::ModelError;
pub use request_status::RequestStatus;
pub use user_record::UserRecord;
