#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tracing::metadata::LevelFilter;

/// Environment variable that selects the log level.
pub const LOG_ENV: &str = "GRADEBOOK_LOG";

/// Parses the optional log-level environment value into a `LevelFilter`,
/// defaulting to `LevelFilter::INFO` when unset or unrecognised.
fn parse_log_level(val: Option<String>) -> LevelFilter {
    match val
        .map(|s| s.trim().to_ascii_lowercase())
        .as_deref()
        .unwrap_or("info")
    {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

/// Runtime settings for the `gradebook` binary, sourced from the
/// environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum level of log events to emit.
    log_level: LevelFilter,
}

impl Config {
    /// Reads settings from the current environment.
    pub fn from_env() -> Self {
        Self::from_values(std::env::var(LOG_ENV).ok())
    }

    /// Builds settings from already-fetched environment values.
    pub fn from_values(log_level: Option<String>) -> Self {
        Self {
            log_level: parse_log_level(log_level),
        }
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None)
    }
}
