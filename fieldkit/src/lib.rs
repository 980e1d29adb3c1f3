//! # fieldkit
//!
//! Declarative form-field validation for Rust.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `fieldkit` for everything, or on the individual crates
//! for finer-grained control.
//!
//! ```
//! use fieldkit::prelude::*;
//!
//! let field = new_char_field(&Defaults::new().with("Max", 5));
//! assert_eq!(field.clean("hello").unwrap(), "hello");
//! assert!(field.clean("hello!").is_err());
//! ```

/// Core types: errors, option defaults, settings, and logging.
pub use fieldkit_core as core;

/// Field definitions: `BaseField`, the `Field` trait, and `CharField`.
#[cfg(feature = "fields")]
pub use fieldkit_fields as fields;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use fieldkit_core::{Defaults, FieldkitError, FieldkitResult, Settings, ValidationError};

    #[cfg(feature = "fields")]
    pub use fieldkit_fields::{new_char_field, BaseField, CharField, Field, LengthViolation};
}

// Third-party re-exports
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;
