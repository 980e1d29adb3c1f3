//! # fieldkit-core
//!
//! Core types for the fieldkit validation library. This crate has no
//! fieldkit dependencies and provides the foundation the field crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Validation and configuration error types
//! - [`defaults`] - Untyped option maps used to construct fields
//! - [`settings`] - Library settings
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod defaults;
pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use defaults::Defaults;
pub use error::{FieldkitError, FieldkitResult, ValidationError};
pub use settings::Settings;
