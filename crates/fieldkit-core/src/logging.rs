//! Logging integration for fieldkit.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for grouping field events
//! under a span.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`; an unparsable directive
/// falls back to "info". Debug mode uses a pretty, human-readable format,
/// otherwise output is structured JSON. If a global subscriber is already
/// installed this does nothing.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for work done on behalf of one field.
///
/// # Examples
///
/// ```
/// use fieldkit_core::logging::field_span;
///
/// let span = field_span("char");
/// let _guard = span.enter();
/// tracing::debug!("cleaning value");
/// ```
pub fn field_span(kind: &str) -> tracing::Span {
    tracing::info_span!("field", kind = kind)
}
