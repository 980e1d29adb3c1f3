//! Attributes and behaviour shared by every field kind.
//!
//! Concrete fields embed a [`BaseField`] by value and implement [`Field`].

use fieldkit_core::ValidationError;

/// Configuration common to all field kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseField {
    /// Whether a missing value is an error.
    ///
    /// [`Field::clean`] does not consult this; a caller deciding whether a
    /// value is present checks it before calling `clean`.
    pub required: bool,
}

impl BaseField {
    /// Creates a `BaseField` with the given required-ness.
    pub const fn new(required: bool) -> Self {
        Self { required }
    }
}

/// A validation rule for one kind of raw input.
pub trait Field {
    /// The typed value produced by a successful [`clean`](Field::clean).
    type Cleaned;

    /// Returns the shared attributes embedded in this field.
    fn base(&self) -> &BaseField;

    /// Returns `true` if this field must be given a value.
    fn is_required(&self) -> bool {
        self.base().required
    }

    /// Validates a raw value, returning the cleaned value or the reason it was rejected.
    fn clean(&self, value: &str) -> Result<Self::Cleaned, ValidationError>;
}
