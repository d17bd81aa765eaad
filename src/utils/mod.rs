//! Utility functions shared by the CLI and library.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file in the user's config directory
//! - [`logging`] - `tracing` subscriber setup
//! - [`progress`] - Progress bars, no-op without the `progress` feature

pub mod app_data;
pub mod logging;
pub mod progress;

pub use app_data::*;
