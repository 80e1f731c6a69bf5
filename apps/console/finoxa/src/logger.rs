//! Logging for the Finoxa terminal application.
//!
//! Two outputs: coloured stdout for warnings and errors (stdout is also the
//! UI, so lower levels would drown it), and a plain-text log file that gets
//! every record at the configured level.

use crate::error::FinoxaError;

use common::ErrorLocation;

use std::io::stdout;
use std::panic::Location;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

static INIT_LOGGER_ONCE: Once = Once::new();

static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "finoxa.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Only these reach the terminal.
const STDOUT_LEVEL: LevelFilter = LevelFilter::Warn;

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Install the global logger writing to stdout and `{log_dir}/finoxa.log`.
///
/// Safe to call more than once: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or another global
/// logger is already installed.
pub fn initialize(log_dir: &Path) -> Result<(), FinoxaError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = build_dispatch(log_dir).and_then(apply);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");
        }
    });

    result
}

/// Build the dual dispatch without installing it.
#[track_caller]
pub fn build_dispatch(log_dir: &Path) -> Result<Dispatch, FinoxaError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .level(STDOUT_LEVEL)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
            ))
        })
        .chain(stdout());

    let log_file = fern::log_file(&log_file_path).map_err(|e| FinoxaError::Finoxa {
        message: format!("Failed to create log file {}: {e}", log_file_path.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(log_file);

    Ok(Dispatch::new()
        .level(LOG_LEVEL)
        // reqwest and its stack are chatty at debug
        .level_for("hyper_util", LevelFilter::Info)
        .level_for("rustls", LevelFilter::Info)
        .chain(stdout_dispatch)
        .chain(file_dispatch))
}

#[track_caller]
fn apply(dispatch: Dispatch) -> Result<(), FinoxaError> {
    dispatch.apply().map_err(|e| FinoxaError::Finoxa {
        message: format!("Failed to initialize logger: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
