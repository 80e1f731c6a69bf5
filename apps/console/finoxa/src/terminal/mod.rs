//! Line-oriented front end: read a command, dispatch it, print the view.

pub mod command;
pub mod render;

pub use command::{Command, HELP_TEXT};
pub use render::render;

use crate::error::FinoxaError;

use client_core::error::CoreError;
use client_core::{App, Outcome};

use common::ErrorLocation;

use std::panic::Location;

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "> ";

pub struct Terminal {
    app: App,
}

impl Terminal {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Print the loading view, then run the startup session check and
    /// route to `initial_path`.
    pub async fn boot<W>(&mut self, initial_path: &str, output: &mut W) -> Result<(), FinoxaError>
    where
        W: AsyncWrite + Unpin,
    {
        self.print_view(output).await?;
        self.app.boot(initial_path).await.map_err(core_error)
    }

    /// Run until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), FinoxaError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        self.print_view(&mut output).await?;

        loop {
            write_out(&mut output, PROMPT).await?;

            let Some(line) = lines.next_line().await.map_err(terminal_error)? else {
                debug!("End of input");
                return Ok(());
            };

            match Command::parse(&line) {
                Command::Empty => continue,
                Command::Quit => return Ok(()),
                Command::Help => write_out(&mut output, &format!("{HELP_TEXT}\n")).await?,
                Command::Unknown(text) => {
                    write_out(&mut output, &format!("Unknown command: {text} (try help)\n"))
                        .await?;
                }
                Command::Action(action) => {
                    match self.app.dispatch(action).await {
                        Ok(Outcome::Copy(key)) => {
                            write_out(&mut output, &format!("Copied API key: {key}\n")).await?;
                        }
                        Ok(Outcome::Ignored) => {
                            write_out(&mut output, "Not available on this page\n").await?;
                        }
                        Ok(Outcome::None) => {}
                        Err(e) => {
                            warn!("Action failed: {e}");
                        }
                    }
                    self.print_view(&mut output).await?;
                }
            }
        }
    }

    async fn print_view<W>(&self, output: &mut W) -> Result<(), FinoxaError>
    where
        W: AsyncWrite + Unpin,
    {
        let text = render(&self.app.view().await);
        write_out(output, &text).await
    }
}

async fn write_out<W>(output: &mut W, text: &str) -> Result<(), FinoxaError>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(text.as_bytes())
        .await
        .map_err(terminal_error)?;
    output.flush().await.map_err(terminal_error)
}

#[track_caller]
fn core_error(e: CoreError) -> FinoxaError {
    FinoxaError::Core {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn terminal_error(e: std::io::Error) -> FinoxaError {
    FinoxaError::Terminal {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
