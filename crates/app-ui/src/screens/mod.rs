//! Application screens
//!
//! Each screen is a pure function from navigation params and screen-local
//! state to a [`View`] tree. [`ScreenView`] adds the navigator chrome
//! (header and tab bar) around the visible screen's body.

pub mod details;
pub mod home;
pub mod login;
pub mod search;
pub mod user;

use crate::components::{Container, TabBar, Text, View};
use crate::navigation::Route;
use crate::strings;
use crate::styles::StyleClass;
use serde::{Deserialize, Serialize};

/// Stack navigator header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Screen name
    pub title: String,
    /// Whether a back control is shown
    pub can_go_back: bool,
}

/// Everything visible on the device for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenView {
    /// Visible route
    pub route: Route,
    /// Deep link to the visible route
    pub path: String,
    /// Stack header, when the navigator shows one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    /// Screen content
    pub body: View,
    /// Tab bar, in the main app only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_bar: Option<TabBar>,
}

impl ScreenView {
    /// Screen without chrome
    pub fn new(route: Route, body: View) -> Self {
        Self {
            path: route.to_path(),
            route,
            header: None,
            body,
            tab_bar: None,
        }
    }

    /// Add a stack header
    pub fn with_header(mut self, can_go_back: bool) -> Self {
        self.header = Some(Header {
            title: self.route.title().to_string(),
            can_go_back,
        });
        self
    }

    /// Add the tab bar
    pub fn with_tab_bar(mut self, tab_bar: TabBar) -> Self {
        self.tab_bar = Some(tab_bar);
        self
    }
}

/// Body shown for a route no screen handles
pub fn not_found() -> View {
    Container::new()
        .with_class(StyleClass::Center)
        .child(Text::new(strings::NOT_FOUND))
        .into()
}
