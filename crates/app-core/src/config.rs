//! Application configuration
//!
//! Selects which edition of the front-end runs and lets the search grid
//! size be overridden. Configuration is read from a JSON file; every field
//! is optional.
//!
//! ```json
//! { "edition": "classic", "search_grid_len": 12 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Largest accepted search grid
pub const MAX_SEARCH_GRID_LEN: usize = 200;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration JSON
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application edition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// First draft: tabs only, no login screen
    Classic,
    /// Second draft: login screen gates the tabs
    #[default]
    Gated,
}

impl Edition {
    /// Whether a login screen precedes the main app
    pub fn has_login_gate(&self) -> bool {
        matches!(self, Edition::Gated)
    }

    /// Default number of search grid cells
    pub fn default_search_grid_len(&self) -> usize {
        match self {
            Edition::Classic => 20,
            Edition::Gated => 21,
        }
    }

    /// Whether the user screen shows the header and sectioned menu
    pub fn has_user_menu(&self) -> bool {
        matches!(self, Edition::Gated)
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Which edition to run
    pub edition: Edition,
    /// Override for the search grid size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_grid_len: Option<usize>,
}

impl AppConfig {
    /// Configuration for an edition with its defaults
    pub fn for_edition(edition: Edition) -> Self {
        Self {
            edition,
            search_grid_len: None,
        }
    }

    /// Parse and validate configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), edition = ?config.edition, "Loaded config");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if let Some(len) = self.search_grid_len {
            if len == 0 || len > MAX_SEARCH_GRID_LEN {
                return Err(ConfigError::Invalid(format!(
                    "search_grid_len must be between 1 and {}, got {}",
                    MAX_SEARCH_GRID_LEN, len
                )));
            }
        }
        Ok(())
    }

    /// Effective search grid size
    pub fn search_grid_len(&self) -> usize {
        self.search_grid_len
            .unwrap_or_else(|| self.edition.default_search_grid_len())
    }
}
