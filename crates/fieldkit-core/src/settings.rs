//! Settings for fieldkit.
//!
//! [`Settings`] holds the process-wide knobs that sit around field
//! validation rather than inside it. Use [`settings_loader`](crate::settings_loader)
//! to build one from a file or the environment.

use serde::{Deserialize, Serialize};

/// The complete set of fieldkit settings.
///
/// # Examples
///
/// ```
/// use fieldkit_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled. Selects human-readable log output.
    pub debug: bool,
    /// The log filter directive (e.g. `info` or `fieldkit_fields=trace`).
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert!(s.debug);
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn test_settings_serialize_roundtrip_keys() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["debug"], serde_json::json!(true));
        assert_eq!(json["log_level"], serde_json::json!("info"));
    }
}
