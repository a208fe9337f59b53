//! Core application data for Vitrine
//!
//! This crate holds the static data and the small amount of domain logic
//! the screens draw on: the item catalog, the user menu, the search grid,
//! the login policy, and configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod catalog;
pub mod config;
pub mod menu;
pub mod search;

pub use auth::{AcceptAnyCredentials, AuthError, Credentials, LoginPolicy};
pub use catalog::{Catalog, CatalogError, Item};
pub use config::{AppConfig, ConfigError, Edition};
pub use menu::{MenuSection, SectionedMenu};
pub use search::{GridCell, SearchGrid};
