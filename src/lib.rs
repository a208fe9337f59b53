//! Vitrine - a tabbed catalogue front-end
//!
//! This crate ties the workspace together behind a headless driver: the
//! [`commands`] module parses a small command language and the [`driver`]
//! module runs it against an [`app_ui::App`], printing each rendered
//! screen as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod driver;

pub use commands::{parse_line, Command, CommandError};
pub use driver::{Driver, DriverError, SessionSummary};
