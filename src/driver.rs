//! Interactive session driver
//!
//! Reads commands line by line, dispatches them to an [`App`], and writes
//! the rendered screen as JSON after every accepted command. Rejected
//! commands are reported on the error stream and the session carries on.

use crate::commands::{parse_line, Command};
use app_core::LoginPolicy;
use app_ui::App;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Driver errors
#[derive(Debug, Error)]
pub enum DriverError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A screen could not be serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands that were applied
    pub applied: usize,
    /// Commands that were rejected
    pub rejected: usize,
}

/// Drives an [`App`] from a line-oriented command stream
#[derive(Debug)]
pub struct Driver<P> {
    app: App<P>,
    compact: bool,
}

impl<P: LoginPolicy> Driver<P> {
    /// Create a driver; `compact` prints one JSON document per line
    pub fn new(app: App<P>, compact: bool) -> Self {
        Self { app, compact }
    }

    /// The driven app
    pub fn app(&self) -> &App<P> {
        &self.app
    }

    /// Run until `quit` or end of input
    ///
    /// The initial screen is rendered before the first command is read.
    pub fn run(
        &mut self,
        input: impl BufRead,
        mut output: impl Write,
        mut errors: impl Write,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        self.render(&mut output)?;

        for (number, line) in input.lines().enumerate() {
            let line = line?;
            let command = match parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(errors, "line {}: {}", number + 1, e)?;
                    summary.rejected += 1;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Show => {}
                Command::Dispatch(action) => {
                    if let Err(e) = self.app.dispatch(action) {
                        writeln!(errors, "line {}: {}", number + 1, e)?;
                        summary.rejected += 1;
                        continue;
                    }
                }
            }
            summary.applied += 1;
            self.render(&mut output)?;
        }

        output.flush()?;
        tracing::debug!(?summary, "Session ended");
        Ok(summary)
    }

    fn render(&self, output: &mut impl Write) -> Result<()> {
        let screen = self.app.render();
        if self.compact {
            serde_json::to_writer(&mut *output, &screen)?;
        } else {
            serde_json::to_writer_pretty(&mut *output, &screen)?;
        }
        writeln!(output)?;
        Ok(())
    }
}
