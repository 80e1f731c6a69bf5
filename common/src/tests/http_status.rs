use crate::HttpStatusCode;

/// **VALUE**: Status classification drives which message the stores display.
///
/// **WHY THIS MATTERS**: The API client decides success from the status class; getting a
/// boundary wrong turns a 299 into an error or a 400 into a success.
///
/// **BUG THIS CATCHES**: Off-by-one range checks.
#[test]
fn given_boundary_codes_when_classified_then_ranges_are_half_open() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

#[test]
fn given_401_when_checked_then_is_unauthorized() {
    assert!(HttpStatusCode::from(401).is_unauthorized());
    assert!(!HttpStatusCode::from(403).is_unauthorized());
    assert_eq!(HttpStatusCode(401).to_string(), "401");
}
