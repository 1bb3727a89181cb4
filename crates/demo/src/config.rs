//! Demo configuration, read from the environment.

use crate::tracing_setup::{LogFormat, UnknownFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_VAR: &str = "REFLEKT_LOG";

/// Environment variable selecting the log format.
pub const LOG_FORMAT_VAR: &str = "REFLEKT_LOG_FORMAT";

/// Filter used when `REFLEKT_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors produced while reading [`DemoConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `REFLEKT_LOG_FORMAT` named no known format.
    #[error("invalid REFLEKT_LOG_FORMAT: {0}")]
    InvalidFormat(#[from] UnknownFormat),

    /// `REFLEKT_LOG` is not a valid filter directive.
    #[error("invalid REFLEKT_LOG directive `{directive}`: {source}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Why it was rejected.
        #[source]
        source: ParseError,
    },
}

/// Settings for the demo binary.
///
/// Only diagnostics are configurable; the property listing itself is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// `tracing` env-filter directive.
    pub log_filter: String,
    /// Diagnostic output format.
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl DemoConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// # Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Unset or blank variables
    /// keep their defaults.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidFilter`] if the filter directive does not parse.
    /// - [`ConfigError::InvalidFormat`] if the log format is not recognized.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|v| !v.trim().is_empty()) {
            if let Err(source) = EnvFilter::try_new(&filter) {
                return Err(ConfigError::InvalidFilter {
                    directive: filter,
                    source,
                });
            }
            config.log_filter = filter;
        }

        if let Some(format) = lookup(LOG_FORMAT_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }

    /// Builds the subscriber filter.
    ///
    /// A directive that does not parse, which only a hand-built config can
    /// hold, is replaced by [`DEFAULT_LOG_FILTER`].
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}
