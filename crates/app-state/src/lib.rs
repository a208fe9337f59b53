//! Application state for Vitrine
//!
//! This crate holds the mutable state the root controller owns: the
//! session mode switch and the screen-local input state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod local;
pub mod session;

pub use local::{LocalState, LoginForm, SearchState, TextField};
pub use session::{SessionError, SessionMode, SessionState};
