//! Untyped option defaults used to configure fields.
//!
//! [`Defaults`] maps option names to loosely typed values. Fields read the
//! keys they recognise and check each value's type at runtime, so a map can
//! carry options for several field kinds at once and a misspelled or
//! mistyped option never causes construction to fail.

use std::collections::hash_map;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::FieldkitError;

/// A map from option name to an untyped value.
///
/// # Examples
///
/// ```
/// use fieldkit_core::Defaults;
///
/// let defaults = Defaults::new().with("Min", 3).with("Required", true);
///
/// assert_eq!(defaults.get_usize("Min"), Some(3));
/// assert_eq!(defaults.get_bool("Required"), Some(true));
/// assert_eq!(defaults.get_usize("Required"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    inner: HashMap<String, Value>,
}

impl Defaults {
    /// Creates an empty `Defaults`.
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Parses a JSON object into a `Defaults`.
    ///
    /// Only the top-level shape is checked; the values themselves stay
    /// untyped until a field reads them.
    pub fn from_json_str(json: &str) -> Result<Self, FieldkitError> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            FieldkitError::ConfigurationError(format!("Failed to parse defaults JSON: {e}"))
        })?;
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(FieldkitError::ConfigurationError(format!(
                "Defaults must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Sets the value for an option, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.insert(key.into(), value.into())
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the raw value for an option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Returns the option as a boolean, or `None` if it is absent or not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns the option as a non-negative integer.
    ///
    /// Floats, strings, negative integers and anything that does not fit in
    /// a `usize` yield `None`.
    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(as_usize)
    }

    /// Returns `true` if the option is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no options.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.inner.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Defaults {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Defaults {
    fn from(inner: HashMap<String, Value>) -> Self {
        Self { inner }
    }
}

impl<'a> IntoIterator for &'a Defaults {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Reads an untyped value as a non-negative integer that fits in a `usize`.
pub fn as_usize(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|n| usize::try_from(n).ok())
}

/// Names a JSON value's type for log and error messages.
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
