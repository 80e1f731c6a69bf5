use crate::session::{SESSION_FILE_NAME, SessionFile};

use common::RedactedSecret;

use tempfile::TempDir;

/// **VALUE**: A saved token loads back unchanged.
///
/// **WHY THIS MATTERS**: This is what keeps a user signed in across runs.
///
/// **BUG THIS CATCHES**: Would catch the token being serialized through `RedactedSecret`
/// (which refuses) or written to the temp path without the rename.
#[test]
fn given_saved_token_when_loaded_then_same_token() {
    let dir = TempDir::new().unwrap();
    let session = SessionFile::in_dir(dir.path());

    session.save(&RedactedSecret::new("jwt.payload.sig")).unwrap();
    let loaded = session.load().unwrap().expect("token");

    assert_eq!(loaded.as_str(), "jwt.payload.sig");
    assert!(dir.path().join(SESSION_FILE_NAME).exists());
    assert!(!dir.path().join("session.json.tmp").exists());
}

#[test]
fn given_missing_file_when_loaded_then_none() {
    let dir = TempDir::new().unwrap();

    let loaded = SessionFile::in_dir(dir.path()).load().unwrap();

    assert!(loaded.is_none());
}

#[test]
fn given_saved_session_when_cleared_twice_then_file_gone_and_no_error() {
    let dir = TempDir::new().unwrap();
    let session = SessionFile::in_dir(dir.path());
    session.save(&RedactedSecret::new("jwt")).unwrap();

    session.clear().unwrap();
    session.clear().unwrap();

    assert!(session.load().unwrap().is_none());
}

#[test]
fn given_corrupt_file_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(SESSION_FILE_NAME), "{not json").unwrap();

    let err = SessionFile::in_dir(dir.path()).load().unwrap_err();

    assert!(format!("{err}").contains("Session Parse Error"));
}

#[test]
fn given_nested_missing_dir_when_saved_then_directory_created() {
    let dir = TempDir::new().unwrap();
    let session = SessionFile::in_dir(&dir.path().join("a").join("b"));

    session.save(&RedactedSecret::new("jwt")).unwrap();

    assert!(session.path().exists());
}
