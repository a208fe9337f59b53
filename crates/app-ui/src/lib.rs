//! User interface for Vitrine
//!
//! This crate provides the UI layer: the navigation graph, the view-tree
//! components, the style table, the screens, and the root controller that
//! ties them together.
//!
//! # Navigation graph
//!
//! - Root switch: login screen or main app (gated edition only)
//! - Tabs: Home, Recherche, Utilisateur, each with its own stack
//! - Home stack: item list, then item details
//!
//! # Modules
//!
//! - [`app`] - Root controller dispatching actions and rendering screens
//! - [`action`] - Input actions carried by interactive views
//! - [`navigation`] - Routes, stacks, tabs and the deep link router
//! - [`components`] - View-tree component library
//! - [`styles`] - Style table
//! - [`screens`] - Screen render functions
//! - [`strings`] - Static display strings
//!
//! # Example
//!
//! ```rust
//! use app_core::{AppConfig, Edition};
//! use app_ui::{Action, App, NavigationTab, Route};
//!
//! let mut app = App::new(AppConfig::for_edition(Edition::Classic));
//! app.dispatch(Action::SelectItem { index: 0 }).unwrap();
//! app.dispatch(Action::SelectTab { tab: NavigationTab::Search }).unwrap();
//! app.dispatch(Action::SelectTab { tab: NavigationTab::Home }).unwrap();
//!
//! // The home tab kept its details screen
//! assert_eq!(app.current_route(), &Route::details("Item 1"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod app;
pub mod components;
pub mod navigation;
pub mod screens;
pub mod strings;
pub mod styles;

pub use action::Action;
pub use app::{App, AppError, Transition};
pub use components::{StyleProps, TabBar, View};
pub use navigation::{
    NavigationAnimation, NavigationError, NavigationStack, NavigationState, NavigationTab, Route,
    RouteParams, Router, StackEntry,
};
pub use screens::{Header, ScreenView};
pub use styles::StyleClass;
