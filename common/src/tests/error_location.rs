use crate::ErrorLocation;
use std::panic::Location;

#[track_caller]
fn capture() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

/// **VALUE**: Verifies that `ErrorLocation::from()` records the caller's file, line and column.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries an `ErrorLocation`. If the
/// capture breaks, logs stop pointing at the request or store method that failed.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` is dropped from a helper so the
/// location points at the helper instead of the call site.
#[test]
fn given_track_caller_helper_when_location_captured_then_points_at_call_site() {
    // GIVEN/WHEN: Capturing through a #[track_caller] helper
    let expected_line = line!() + 1;
    let location = capture();

    // THEN: The line is the call site, not the helper body
    assert!(location.file.ends_with("error_location.rs"));
    assert_eq!(location.line, expected_line);
    assert!(location.column > 0);
}

/// **VALUE**: Verifies the `[file:line:column]` display format used as the error suffix.
///
/// **WHY THIS MATTERS**: Error variants render `{message} {location}`. Callers that strip
/// the suffix for user-facing text rely on this exact shape.
///
/// **BUG THIS CATCHES**: Would catch format drift (missing brackets, extra separators).
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_triple() {
    // GIVEN: A fixed location
    let location = ErrorLocation {
        file: "src/api_client/mod.rs",
        line: 42,
        column: 7,
    };

    // WHEN/THEN: Display is bracketed file:line:column
    assert_eq!(location.to_string(), "[src/api_client/mod.rs:42:7]");
}

/// **VALUE**: Different call sites yield different line numbers.
///
/// **WHY THIS MATTERS**: Two failures in the same function must be distinguishable in logs.
///
/// **BUG THIS CATCHES**: Would catch a cached or constant location.
#[test]
fn given_two_call_sites_when_capturing_then_lines_are_sequential() {
    let first = capture();
    let second = capture();

    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line);
}
