//! Diagnostic logging setup.
//!
//! All log output goes to stderr so stdout stays clean for YAML and JSON
//! results.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Parses a log level name (error, warn, info, debug, trace), ignoring case.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Installs the global subscriber at `level`.
///
/// An unrecognized level falls back to info and logs a warning. Calling this
/// more than once keeps the first subscriber.
pub fn init(level: &str) {
    let parsed = parse_level(level);
    let filter = EnvFilter::default().add_directive(parsed.unwrap_or(LevelFilter::INFO).into());

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    if installed.is_ok() && parsed.is_none() {
        tracing::warn!(level, "unrecognized log level, falling back to info");
    }
}
