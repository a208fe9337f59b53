//! Session mode store
//!
//! The root of the navigation graph switches between the login screen and
//! the main app. This module owns that single switch. It is never
//! persisted: every process starts from the edition's initial mode.

use app_core::Edition;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session-related errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Login was submitted while already in the main app
    #[error("Session already entered the main app")]
    AlreadyInMainApp,
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Which half of the root navigator is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Login screen
    Login,
    /// Tabbed main app
    MainApp,
}

/// Root session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    mode: SessionMode,
    /// Number of completed logins since process start
    logins: u32,
}

impl SessionState {
    /// Initial session for an edition
    pub fn new(edition: Edition) -> Self {
        let mode = if edition.has_login_gate() {
            SessionMode::Login
        } else {
            SessionMode::MainApp
        };
        Self { mode, logins: 0 }
    }

    /// Current mode
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Whether the main app is visible
    pub fn in_main_app(&self) -> bool {
        self.mode == SessionMode::MainApp
    }

    /// Completed logins since process start
    pub fn logins(&self) -> u32 {
        self.logins
    }

    /// Switch from the login screen to the main app
    pub fn enter_main_app(&mut self) -> Result<()> {
        if self.in_main_app() {
            return Err(SessionError::AlreadyInMainApp);
        }
        self.mode = SessionMode::MainApp;
        self.logins += 1;
        tracing::info!(logins = self.logins, "Session entered main app");
        Ok(())
    }
}
