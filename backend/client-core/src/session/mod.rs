//! Persistence of the `token` cookie between runs.
//!
//! A browser keeps the cookie across page loads; the terminal application
//! keeps it in `{config_dir}/session.json` so the startup session check
//! has something to send.

use crate::error::session::SessionError;

use common::{ErrorLocation, RedactedSecret};

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn in_dir(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved token, or `None` if there is no session file.
    pub fn load(&self) -> Result<Option<RedactedSecret>, SessionError> {
        if !self.path.exists() {
            debug!("No session file at {}", self.path.display());
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| SessionError::Read {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            source: e,
        })?;

        let stored: StoredSession =
            serde_json::from_str(&contents).map_err(|e| SessionError::Parse {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        if stored.token.is_empty() {
            return Ok(None);
        }

        info!("Restored session from {}", self.path.display());
        Ok(Some(RedactedSecret::new(stored.token)))
    }

    /// Write the token with temp file + rename so a crash never leaves a
    /// half-written file.
    pub fn save(&self, token: &RedactedSecret) -> Result<(), SessionError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| SessionError::Write {
                location: ErrorLocation::from(Location::caller()),
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let stored = StoredSession {
            token: token.as_str().to_string(),
        };
        let json = serde_json::to_string(&stored).map_err(|e| SessionError::Parse {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(|e| SessionError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| SessionError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            source: e,
        })?;

        debug!("Session saved ({} byte token)", token.len());
        Ok(())
    }

    /// Remove the session file. Missing files are fine.
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Write {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
