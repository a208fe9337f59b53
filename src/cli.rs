//! Command-line arguments

use app_core::{AppConfig, Edition};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `vitrine` binary
#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about = "Headless driver for the Vitrine front-end")]
pub struct Cli {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Edition to run, overriding the configuration file
    #[arg(long, value_enum)]
    pub edition: Option<EditionArg>,
    /// Print one JSON document per line
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}

/// Edition names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EditionArg {
    /// Tabs only
    Classic,
    /// Login screen before the tabs
    Gated,
}

impl From<EditionArg> for Edition {
    fn from(arg: EditionArg) -> Self {
        match arg {
            EditionArg::Classic => Edition::Classic,
            EditionArg::Gated => Edition::Gated,
        }
    }
}

impl Cli {
    /// Resolve the effective configuration
    pub fn resolve_config(&self) -> app_core::config::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(edition) = self.edition {
            config.edition = edition.into();
        }
        Ok(config)
    }
}
