//! Screen-local ephemeral state
//!
//! Text inputs keep their contents in state scoped to the screen that owns
//! them. The search query lives on the search screen's stack entry and
//! survives tab switches; the login form lives only while the login
//! screen is shown.
//!
//! Neither is read back by anything else: the query does not filter the
//! grid, and the login form is handed to the login policy untouched.

use app_core::Credentials;
use serde::{Deserialize, Serialize};

/// Text inputs that can receive keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    /// Search bar
    SearchQuery,
    /// Login email
    Email,
    /// Login password
    Password,
}

impl TextField {
    /// Parse a field name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "query" | "search" => Some(TextField::SearchQuery),
            "email" => Some(TextField::Email),
            "password" => Some(TextField::Password),
            _ => None,
        }
    }
}

/// Search screen input state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Current text of the search bar
    pub query: String,
    /// Number of change events received
    pub revision: u64,
}

/// State owned by one stack entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocalState {
    /// Screen has no local state
    #[default]
    Empty,
    /// Search screen
    Search(SearchState),
}

impl LocalState {
    /// Fresh search state
    pub fn search() -> Self {
        LocalState::Search(SearchState::default())
    }

    /// Search query, if this is a search screen
    pub fn search_query(&self) -> Option<&str> {
        match self {
            LocalState::Search(state) => Some(&state.query),
            LocalState::Empty => None,
        }
    }

    /// Apply a text change; returns false if this state has no such field
    pub fn apply_text(&mut self, field: TextField, value: &str) -> bool {
        match (self, field) {
            (LocalState::Search(state), TextField::SearchQuery) => {
                state.query = value.to_string();
                state.revision += 1;
                tracing::debug!(revision = state.revision, "Search query changed");
                true
            }
            _ => false,
        }
    }
}

/// Login screen input state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
}

impl LoginForm {
    /// Empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Email field contents
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password length, for rendering masked input
    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    /// Apply a text change; returns false if the form has no such field
    pub fn apply_text(&mut self, field: TextField, value: &str) -> bool {
        match field {
            TextField::Email => self.email = value.to_string(),
            TextField::Password => self.password = value.to_string(),
            TextField::SearchQuery => return false,
        }
        tracing::debug!(?field, "Login field changed");
        true
    }

    /// Consume the form into credentials for the login policy
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.email, self.password)
    }
}
