//! Login policy
//!
//! The login screen collects an email and a password and then asks a
//! [`LoginPolicy`] whether to let the user into the main app. The shipped
//! policy, [`AcceptAnyCredentials`], admits every submission, including
//! empty fields: there is no credential store behind this application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Login rejection reasons
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The policy refused the credentials
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Result type for login operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Credentials as typed on the login screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Email field contents
    pub email: String,
    /// Password field contents
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Whether both fields are empty
    pub fn is_blank(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// Decides whether a login submission enters the main app
pub trait LoginPolicy {
    /// Check the submitted credentials
    fn check(&self, credentials: &Credentials) -> Result<()>;
}

/// Admits every submission without looking at it
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyCredentials;

impl LoginPolicy for AcceptAnyCredentials {
    fn check(&self, credentials: &Credentials) -> Result<()> {
        tracing::debug!(
            blank = credentials.is_blank(),
            "Accepting login without validation"
        );
        Ok(())
    }
}
