//! User input actions
//!
//! Every interactive element in the view tree carries the [`Action`] it
//! dispatches. The root controller turns actions into transitions.

use crate::navigation::NavigationTab;
use app_state::TextField;
use serde::{Deserialize, Serialize};

/// An input event dispatched to the root controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Submit the login form
    SubmitLogin,
    /// Tap a catalog item on the home list (0-based)
    SelectItem {
        /// List position
        index: usize,
    },
    /// Pop the active stack
    Back,
    /// Tap a tab bar item
    SelectTab {
        /// Target tab
        tab: NavigationTab,
    },
    /// Text input changed
    ChangeText {
        /// Which input
        field: TextField,
        /// Full new contents
        value: String,
    },
    /// Tap a user menu row
    PressMenuRow {
        /// Section index
        section: usize,
        /// Row index within the section
        row: usize,
    },
    /// Follow a deep link
    Open {
        /// Path such as `/details/Item%201`
        path: String,
    },
}

impl Action {
    /// Short name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Action::SubmitLogin => "submit_login",
            Action::SelectItem { .. } => "select_item",
            Action::Back => "back",
            Action::SelectTab { .. } => "select_tab",
            Action::ChangeText { .. } => "change_text",
            Action::PressMenuRow { .. } => "press_menu_row",
            Action::Open { .. } => "open",
        }
    }

    /// Text change helper
    pub fn change_text(field: TextField, value: impl Into<String>) -> Self {
        Action::ChangeText {
            field,
            value: value.into(),
        }
    }
}
