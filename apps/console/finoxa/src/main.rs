use finoxa::error::FinoxaError;
use finoxa::logger::initialize as LoggerInitialize;
use finoxa::terminal::Terminal;

use client_core::config::{AppConfig, config_dir, load_dotenv};
use client_core::session::SessionFile;
use client_core::{ApiClient, App};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use log::{error, info};
use tokio::io::{BufReader, stdin, stdout};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FinoxaError> {
    // Before the config dir lookup: .env may set FINOXA_CONFIG_DIR
    let dotenv_path = load_dotenv();

    let config_dir = config_dir().map_err(core_error)?;
    create_dir_all(&config_dir).map_err(|e| FinoxaError::Finoxa {
        message: format!("Failed to create config directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    LoggerInitialize(&config_dir)?;

    info!("Finoxa terminal starting");
    info!("Config directory: {}", config_dir.display());
    if let Some(path) = dotenv_path {
        info!("Environment loaded from {}", path.display());
    }

    let config = AppConfig::load(&config_dir).map_err(core_error)?;
    let base_url = config.resolve_base_url().map_err(core_error)?;
    info!("Using API at {base_url}");

    let client = ApiClient::with_timeout(&base_url, config.timeout()).map_err(core_error)?;
    let app = App::new(client, Some(SessionFile::in_dir(&config_dir)));

    let mut output = stdout();
    let mut terminal = Terminal::new(app);
    terminal.boot("/", &mut output).await?;
    terminal.run(BufReader::new(stdin()), output).await?;

    info!("Finoxa terminal exiting");
    Ok(())
}

#[track_caller]
fn core_error(e: impl std::fmt::Display) -> FinoxaError {
    FinoxaError::Core {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
