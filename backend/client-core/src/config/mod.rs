//! Application configuration.
//!
//! `config.json` in the config directory holds persistent settings. The
//! backend base URL can be overridden from the environment (optionally
//! via a `.env` file), mirroring a build-time API URL in a web front end.

use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;
const CONFIG_DIR_NAME: &str = "finoxa";

pub const API_URL_ENV: &str = "FINOXA_API_URL";
pub const CONFIG_DIR_ENV: &str = "FINOXA_CONFIG_DIR";

pub const DEFAULT_API_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_API_PORT: u16 = 8000;
pub const DEFAULT_API_BASE_URL: &str =
    const_format::concatcp!("http://", DEFAULT_API_HOSTNAME, ":", DEFAULT_API_PORT);

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: ApiConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_timeout_secs() -> u64 {
    30
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, the write or the rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > 300 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}s (must be 1-300)",
                    self.api.timeout_secs
                ),
            });
        }

        if let Some(ref url) = self.api.base_url {
            validate_base_url(url)?;
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Backend base URL: environment, then config file, then the local default.
    pub fn resolve_base_url(&self) -> Result<String, ConfigError> {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.is_empty() {
                validate_base_url(&url)?;
                debug!("Using API URL from {API_URL_ENV}");
                return Ok(url);
            }
        }

        if let Some(ref url) = self.api.base_url {
            return Ok(url.clone());
        }

        Ok(DEFAULT_API_BASE_URL.to_string())
    }
}

fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: "API base URL cannot be empty string".to_string(),
        });
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid URL format: {}", url),
        });
    }

    Ok(())
}

/// Directory holding `config.json` and `session.json`.
///
/// `FINOXA_CONFIG_DIR` wins; otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
            reason: "platform has no config directory".to_string(),
        })
}

/// Load `.env` from the current directory, then beside the executable.
///
/// Returns the path that was loaded, if any. A missing file is not an error.
pub fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    let exe_path = env::current_exe().ok()?;
    let env_path = exe_path.parent()?.join(".env");
    if !env_path.exists() {
        debug!("No .env file found");
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => {
            info!("Loaded .env from: {:?}", env_path);
            Some(env_path)
        }
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
