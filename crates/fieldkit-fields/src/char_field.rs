//! Character (string) fields with optional length bounds.
//!
//! A [`CharField`] accepts any string whose length lies within its bounds
//! and returns it unchanged. Lengths are measured in UTF-8 bytes. A bound of
//! `0` means the bound is not set.

use fieldkit_core::defaults::{as_usize, json_type_name};
use fieldkit_core::{Defaults, ValidationError};
use serde_json::Value;
use thiserror::Error;

use crate::base::{BaseField, Field};

const OPTION_REQUIRED: &str = "Required";
const OPTION_MIN: &str = "Min";
const OPTION_MAX: &str = "Max";

/// Why a value was rejected by a [`CharField`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthViolation {
    /// The value is longer than the configured maximum.
    #[error("The value must have a maximum length of {max} characters.")]
    TooLong {
        /// The configured maximum.
        max: usize,
    },
    /// The value is shorter than the configured minimum.
    #[error("The value must have a minimum length of {min} characters.")]
    TooShort {
        /// The configured minimum.
        min: usize,
    },
}

impl LengthViolation {
    /// Returns the error code used in the resulting [`ValidationError`].
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TooLong { .. } => "max_length",
            Self::TooShort { .. } => "min_length",
        }
    }

    /// Returns the bound that was violated.
    pub const fn limit(&self) -> usize {
        match self {
            Self::TooLong { max } => *max,
            Self::TooShort { min } => *min,
        }
    }
}

impl From<LengthViolation> for ValidationError {
    fn from(violation: LengthViolation) -> Self {
        Self::new(violation.to_string(), violation.code())
            .with_param("limit_value", violation.limit().to_string())
    }
}

/// A validation rule for string input with optional length bounds.
///
/// # Examples
///
/// ```
/// use fieldkit_fields::{CharField, Field};
///
/// let field = CharField::new().min_length(2).max_length(5);
/// assert_eq!(field.clean("hello").unwrap(), "hello");
/// assert_eq!(
///     field.clean("hello!").unwrap_err().to_string(),
///     "The value must have a maximum length of 5 characters."
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharField {
    /// Attributes shared with the other field kinds.
    pub base: BaseField,
    /// Maximum length; `0` leaves the length unbounded.
    pub max: usize,
    /// Minimum length; `0` accepts the empty string.
    pub min: usize,
}

impl CharField {
    /// Creates an optional, unbounded `CharField`.
    pub const fn new() -> Self {
        Self {
            base: BaseField::new(false),
            max: 0,
            min: 0,
        }
    }

    /// Sets whether this field is required.
    #[must_use]
    pub const fn required(self, required: bool) -> Self {
        Self {
            base: BaseField::new(required),
            ..self
        }
    }

    /// Sets the minimum length.
    #[must_use]
    pub const fn min_length(self, min: usize) -> Self {
        Self { min, ..self }
    }

    /// Sets the maximum length. `0` removes the bound.
    #[must_use]
    pub const fn max_length(self, max: usize) -> Self {
        Self { max, ..self }
    }

    /// Builds a `CharField` from untyped option defaults.
    ///
    /// Recognised options are `"Required"` (boolean), `"Min"` and `"Max"`
    /// (non-negative integers). Unknown options and options holding a value
    /// of the wrong type are skipped and the attribute keeps its zero value.
    /// This never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldkit_core::Defaults;
    /// use fieldkit_fields::CharField;
    ///
    /// let defaults = Defaults::new().with("Min", 3).with("Max", "bogus");
    /// let field = CharField::from_defaults(&defaults);
    /// assert_eq!(field.min, 3);
    /// assert_eq!(field.max, 0);
    /// ```
    pub fn from_defaults(defaults: &Defaults) -> Self {
        let mut field = Self::new();
        for (name, value) in defaults {
            match name.as_str() {
                OPTION_REQUIRED => match value.as_bool() {
                    Some(required) => field.base.required = required,
                    None => log_mistyped(name, value),
                },
                OPTION_MIN => match as_usize(value) {
                    Some(min) => field.min = min,
                    None => log_mistyped(name, value),
                },
                OPTION_MAX => match as_usize(value) {
                    Some(max) => field.max = max,
                    None => log_mistyped(name, value),
                },
                _ => tracing::debug!(option = %name, "ignoring unrecognised char field option"),
            }
        }

        if !field.is_satisfiable() {
            tracing::warn!(
                min = field.min,
                max = field.max,
                "char field maximum length is below its minimum; no value will be accepted"
            );
        }
        field
    }

    /// Returns `false` when the bounds leave no acceptable length.
    pub const fn is_satisfiable(&self) -> bool {
        self.max == 0 || self.max >= self.min
    }

    /// Checks `value` against the length bounds.
    ///
    /// The maximum is checked first, so a value violating both bounds
    /// reports [`LengthViolation::TooLong`].
    pub const fn check_length(&self, value: &str) -> Result<(), LengthViolation> {
        let len = value.len();
        if self.max != 0 && len > self.max {
            return Err(LengthViolation::TooLong { max: self.max });
        }
        if len < self.min {
            return Err(LengthViolation::TooShort { min: self.min });
        }
        Ok(())
    }
}

impl Field for CharField {
    type Cleaned = String;

    fn base(&self) -> &BaseField {
        &self.base
    }

    fn clean(&self, value: &str) -> Result<String, ValidationError> {
        if let Err(violation) = self.check_length(value) {
            tracing::trace!(
                code = violation.code(),
                len = value.len(),
                limit = violation.limit(),
                "char field rejected value"
            );
            return Err(violation.into());
        }
        Ok(value.to_string())
    }
}

impl From<&Defaults> for CharField {
    fn from(defaults: &Defaults) -> Self {
        Self::from_defaults(defaults)
    }
}

/// Creates a [`CharField`] from untyped option defaults.
///
/// Equivalent to [`CharField::from_defaults`].
pub fn new_char_field(defaults: &Defaults) -> CharField {
    CharField::from_defaults(defaults)
}

fn log_mistyped(name: &str, value: &Value) {
    let expected = if name == OPTION_REQUIRED {
        "boolean"
    } else {
        "non-negative integer"
    };
    tracing::debug!(
        option = %name,
        expected,
        found = json_type_name(value),
        "ignoring char field option with wrong type"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults(entries: &[(&str, Value)]) -> Defaults {
        entries.iter().cloned().collect()
    }

    // ── clean ───────────────────────────────────────────────────────

    #[test]
    fn test_unbounded_accepts_anything() {
        let field = CharField::new();
        let long = "x".repeat(10_000);
        for value in ["", "a", "hello world", long.as_str()] {
            assert_eq!(field.clean(value).unwrap(), value);
        }
    }

    #[test]
    fn test_max_length_boundary() {
        let field = CharField::new().max_length(5);
        assert_eq!(field.clean("hello").unwrap(), "hello");
        let err = field.clean("hello!").unwrap_err();
        assert_eq!(
            err.message,
            "The value must have a maximum length of 5 characters."
        );
        assert_eq!(err.code, "max_length");
        assert_eq!(err.params.get("limit_value").unwrap(), "5");
    }

    #[test]
    fn test_min_length_boundary() {
        let field = CharField::new().min_length(3);
        assert_eq!(field.clean("abc").unwrap(), "abc");
        let err = field.clean("ab").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The value must have a minimum length of 3 characters."
        );
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn test_min_length_rejects_empty() {
        let field = CharField::new().min_length(1);
        assert!(field.clean("").is_err());
    }

    #[test]
    fn test_max_checked_before_min() {
        // Unsatisfiable: every value is either too long or too short.
        let field = CharField::new().min_length(10).max_length(2);
        let err = field.clean("abcd").unwrap_err();
        assert_eq!(err.code, "max_length");
        assert_eq!(
            field.check_length("abcd"),
            Err(LengthViolation::TooLong { max: 2 })
        );
        assert_eq!(
            field.check_length("a"),
            Err(LengthViolation::TooShort { min: 10 })
        );
    }

    #[test]
    fn test_length_is_utf8_bytes() {
        let field = CharField::new().max_length(3);
        // "héé" is 5 bytes.
        assert!(field.clean("héé").is_err());
        assert!(field.clean("hé").is_ok());
    }

    #[test]
    fn test_clean_ignores_required() {
        let field = CharField::new().required(true);
        assert!(field.is_required());
        assert_eq!(field.clean("").unwrap(), "");
    }

    #[test]
    fn test_clean_is_repeatable() {
        let field = CharField::new().min_length(2).max_length(4);
        for value in ["a", "abc", "abcde"] {
            assert_eq!(field.clean(value), field.clean(value));
        }
    }

    // ── LengthViolation ─────────────────────────────────────────────

    #[test]
    fn test_violation_code_and_limit() {
        let long = LengthViolation::TooLong { max: 7 };
        let short = LengthViolation::TooShort { min: 2 };
        assert_eq!((long.code(), long.limit()), ("max_length", 7));
        assert_eq!((short.code(), short.limit()), ("min_length", 2));
    }

    // ── from_defaults ───────────────────────────────────────────────

    #[test]
    fn test_from_empty_defaults_is_zero_field() {
        let field = CharField::from_defaults(&Defaults::new());
        assert_eq!(field, CharField::default());
        assert!(!field.is_required());
        assert_eq!((field.min, field.max), (0, 0));
    }

    #[test]
    fn test_from_defaults_sets_all_options() {
        let field = new_char_field(&defaults(&[
            ("Required", json!(true)),
            ("Min", json!(2)),
            ("Max", json!(8)),
        ]));
        assert_eq!(
            field,
            CharField::new().required(true).min_length(2).max_length(8)
        );
    }

    #[test]
    fn test_from_defaults_ignores_wrong_types() {
        let field = CharField::from_defaults(&defaults(&[
            ("Required", json!("yes")),
            ("Min", json!(3)),
            ("Max", json!("bogus")),
        ]));
        assert!(!field.base.required);
        assert_eq!(field.min, 3);
        assert_eq!(field.max, 0);
    }

    #[test]
    fn test_from_defaults_ignores_floats_and_negatives() {
        let field = CharField::from_defaults(&defaults(&[
            ("Min", json!(-1)),
            ("Max", json!(5.0)),
        ]));
        assert_eq!(field, CharField::new());
    }

    #[test]
    fn test_from_defaults_ignores_unknown_and_lowercase_keys() {
        let field = CharField::from_defaults(&defaults(&[
            ("max", json!(4)),
            ("Label", json!("Name")),
            ("Min", json!(1)),
        ]));
        assert_eq!(field, CharField::new().min_length(1));
    }

    #[test]
    fn test_from_defaults_allows_unsatisfiable_bounds() {
        let field = CharField::from_defaults(&defaults(&[("Min", json!(5)), ("Max", json!(2))]));
        assert!(!field.is_satisfiable());
        assert_eq!((field.min, field.max), (5, 2));
    }

    #[test]
    fn test_from_trait_matches_from_defaults() {
        let d = defaults(&[("Max", json!(3))]);
        assert_eq!(CharField::from(&d), CharField::from_defaults(&d));
    }

    #[test]
    fn test_is_satisfiable() {
        assert!(CharField::new().is_satisfiable());
        assert!(CharField::new().min_length(9).is_satisfiable());
        assert!(CharField::new().min_length(3).max_length(3).is_satisfiable());
        assert!(!CharField::new().min_length(4).max_length(3).is_satisfiable());
    }
}
