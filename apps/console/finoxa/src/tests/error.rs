use crate::error::FinoxaError;

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Error text carries the variant prefix, the message and the source location.
///
/// **WHY THIS MATTERS**: Startup failures are printed to stderr and the log file; the
/// location is how a bug report gets traced back.
///
/// **BUG THIS CATCHES**: Would catch the `{location}` placeholder being dropped from
/// the `#[error]` attribute.
#[test]
fn given_core_error_when_displayed_then_message_and_location_shown() {
    // GIVEN: A Core error built here
    let location = ErrorLocation::from(Location::caller());
    let err = FinoxaError::Core {
        message: String::from("Invalid URL format: ftp://example.com"),
        location,
    };

    // WHEN: Formatting for display
    let text = err.to_string();

    // THEN: Prefix, message and location are all present
    assert!(text.starts_with("Core Error: Invalid URL format"));
    assert!(text.ends_with(&location.to_string()));
}

#[test]
fn given_terminal_error_when_debug_formatted_then_variant_named() {
    let err = FinoxaError::Terminal {
        message: String::from("broken pipe"),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(format!("{err:?}").contains("Terminal"));
}
