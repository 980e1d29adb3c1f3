//! # fieldkit-fields
//!
//! Field definitions for fieldkit. Each field validates one raw string value
//! and produces a cleaned, typed value or a
//! [`ValidationError`](fieldkit_core::ValidationError).
//!
//! - [`base`] - [`BaseField`] and the [`Field`] trait shared by all field kinds
//! - [`char_field`] - [`CharField`], a string field with length bounds

pub mod base;
pub mod char_field;

pub use base::{BaseField, Field};
pub use char_field::{new_char_field, CharField, LengthViolation};
