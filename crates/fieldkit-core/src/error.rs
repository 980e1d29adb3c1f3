//! Core error types for fieldkit.
//!
//! [`ValidationError`] is what a field produces when a raw input value is
//! rejected. [`FieldkitError`] covers everything else that can go wrong
//! around the fields themselves: loading settings, parsing option defaults,
//! and I/O.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// A rejected input value.
///
/// The `message` is the human-readable text shown to end users. The `code`
/// is a short machine-readable identifier (e.g. `"max_length"`) and `params`
/// carries the values that were interpolated into the message, so callers can
/// tell failures apart without parsing the message text.
///
/// # Examples
///
/// ```
/// use fieldkit_core::error::ValidationError;
///
/// let err = ValidationError::new("The value must have a minimum length of 3 characters.", "min_length")
///     .with_param("limit_value", "3");
/// assert_eq!(err.code, "min_length");
/// assert_eq!(err.to_string(), "The value must have a minimum length of 3 characters.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The human-readable error message.
    pub message: String,
    /// A short code identifying the kind of validation failure.
    pub code: String,
    /// Values interpolated into the message, keyed by name.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for fieldkit.
#[derive(Error, Debug)]
pub enum FieldkitError {
    /// An input value failed field validation.
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    /// A configuration value or option document is missing or malformed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, FieldkitError>`.
pub type FieldkitResult<T> = Result<T, FieldkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_is_message() {
        let err = ValidationError::new("This value is too long.", "max_length");
        assert_eq!(err.to_string(), "This value is too long.");
    }

    #[test]
    fn test_validation_error_with_param() {
        let err = ValidationError::new("Too short.", "min_length").with_param("limit_value", "8");
        assert_eq!(err.params.get("limit_value").unwrap(), "8");
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn test_fieldkit_error_from_validation_error() {
        let err: FieldkitError = ValidationError::new("Too short.", "min_length").into();
        assert_eq!(err.to_string(), "Validation error: Too short.");
        assert!(matches!(err, FieldkitError::ValidationError(_)));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = FieldkitError::ConfigurationError("bad toml".into());
        assert_eq!(err.to_string(), "Configuration error: bad toml");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FieldkitError = io_err.into();
        assert!(matches!(err, FieldkitError::IoError(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
