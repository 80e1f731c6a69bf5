// Form constraint tests for signup and login bodies

use crate::{LoginRequest, SignupRequest};

/// **VALUE**: A complete, well-formed signup form passes validation.
///
/// **WHY THIS MATTERS**: An over-strict validator blocks real users from creating accounts.
///
/// **BUG THIS CATCHES**: Would catch an email pattern that rejects plus-addressing or
/// subdomains.
#[test]
fn given_well_formed_signup_when_validated_then_ok() {
    let request = SignupRequest::new("Ada Lovelace", "ada+api@mail.example.com", "secret1");

    assert!(request.validate().is_ok());
}

/// **VALUE**: Fields are checked in form order and the first failing field is reported.
///
/// **WHY THIS MATTERS**: The signup page highlights a single field, so the order must be
/// stable.
///
/// **BUG THIS CATCHES**: Would catch the name check being skipped.
#[test]
fn given_empty_name_when_validated_then_name_field_reported() {
    let request = SignupRequest::new("", "not-an-email", "123");

    let err = request.validate().unwrap_err();
    assert_eq!(err.field(), "name");
    assert_eq!(err.display_message(), "Please fill out this field.");
}

#[test]
fn given_email_without_at_when_validated_then_email_field_reported() {
    let request = LoginRequest::new("ada.example.com", "secret1");

    let err = request.validate().unwrap_err();
    assert_eq!(err.field(), "email");
}

/// **VALUE**: Passwords shorter than six characters are rejected.
///
/// **WHY THIS MATTERS**: Matches the minimum length the forms advertise.
///
/// **BUG THIS CATCHES**: Off-by-one in the length check (5 chars accepted, or 6 rejected).
#[test]
fn given_password_length_boundary_when_validated_then_six_is_minimum() {
    let short = LoginRequest::new("ada@example.com", "12345");
    let exact = LoginRequest::new("ada@example.com", "123456");

    assert_eq!(short.validate().unwrap_err().field(), "password");
    assert!(exact.validate().is_ok());
}

#[test]
fn given_multibyte_password_when_validated_then_counts_code_units_not_bytes() {
    // Six UTF-16 code units, more than six bytes
    let request = LoginRequest::new("ada@example.com", "pässwö");

    assert!(request.validate().is_ok());
}

/// **VALUE**: Length is counted the way a browser's `minlength` counts it.
///
/// **WHY THIS MATTERS**: Emoji are two UTF-16 code units each, so three of them already
/// satisfy a six-unit minimum in the browser form.
///
/// **BUG THIS CATCHES**: Would catch the count switching to `chars()`, which sees three and
/// rejects a password the browser accepts.
#[test]
fn given_astral_plane_password_when_validated_then_counts_utf16_units() {
    let accepted = LoginRequest::new("ada@example.com", "🔑🔑🔑");
    let rejected = LoginRequest::new("ada@example.com", "🔑🔑");

    assert!(accepted.validate().is_ok());
    let err = rejected.validate().unwrap_err();
    assert_eq!(err.field(), "password");
    assert!(err.display_message().contains("currently using 4 characters"));
}

#[test]
fn given_padded_email_when_request_built_then_whitespace_trimmed() {
    let request = LoginRequest::new("  ada@example.com ", "secret1");

    assert_eq!(request.email, "ada@example.com");
    assert!(request.validate().is_ok());
}

/// **VALUE**: Debug output never contains the password.
///
/// **WHY THIS MATTERS**: Request bodies are logged at debug level.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug on the request structs.
#[test]
fn given_signup_request_when_debug_formatted_then_password_redacted() {
    let request = SignupRequest::new("Ada", "ada@example.com", "hunter22");

    let debug = format!("{request:?}");
    assert!(!debug.contains("hunter22"));
    assert!(debug.contains("ada@example.com"));
}

#[test]
fn given_signup_request_when_serialized_then_sends_plain_fields() {
    let request = SignupRequest::new("Ada", "ada@example.com", "hunter22");

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "Ada", "email": "ada@example.com", "password": "hunter22"})
    );
}
