//! Request bodies for `/auth/signup` and `/auth/login`.
//!
//! Validation mirrors the browser form constraints the backend expects to
//! have been enforced already: every field required, `type=email` on the
//! email field, `minLength=6` on the password.

use crate::ModelError;

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const PASSWORD_MIN_LENGTH: usize = 6;

/// The WHATWG "valid e-mail address" production used by `<input type=email>`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap_or_else(|e| panic!("email pattern must compile: {e}"))
});

#[derive(Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Check the form constraints in field order, returning the first failure.
    pub fn validate(&self) -> Result<(), ModelError> {
        require("name", &self.name)?;
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

// Passwords stay out of Debug output.
impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[track_caller]
fn require(field: &'static str, value: &str) -> Result<(), ModelError> {
    if value.is_empty() {
        return Err(ModelError::validation(field, "Please fill out this field."));
    }
    Ok(())
}

#[track_caller]
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    require("email", email)?;
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ModelError::validation(
            "email",
            format!("Please enter a valid email address: '{email}'"),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> Result<(), ModelError> {
    require("password", password)?;
    // Browsers count `minlength` in UTF-16 code units
    let length = password.encode_utf16().count();
    if length < PASSWORD_MIN_LENGTH {
        return Err(ModelError::validation(
            "password",
            format!(
                "Please use at least {PASSWORD_MIN_LENGTH} characters (you are currently using {length} characters)."
            ),
        ));
    }
    Ok(())
}
