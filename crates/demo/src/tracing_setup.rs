//! Diagnostic logging for the demo binary.
//!
//! [`init`] installs a `tracing` subscriber from a [`DemoConfig`]: its filter
//! directive and one of the [`LogFormat`] layouts. Diagnostics go to stderr
//! so they never interleave with the property listing on stdout.
//!
//! # Example
//!
//! ```
//! use demo::config::DemoConfig;
//! use demo::tracing_setup::{self, LogFormat};
//!
//! let config = DemoConfig {
//!     log_filter: "reflekt_core=trace".to_string(),
//!     log_format: LogFormat::Json,
//! };
//! tracing_setup::init(&config);
//! ```

use crate::config::DemoConfig;
use core::str::FromStr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Layout of diagnostic lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-readable.
    Pretty,
    /// One line per event.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Error returned when parsing an unknown [`LogFormat`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format `{0}` (expected pretty, compact or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Installs the global subscriber described by `config`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init(config: &DemoConfig) -> bool {
    use tracing_subscriber::fmt;

    let format = config.log_format;

    // Exactly one of the three layers is `Some`.
    let installed = tracing_subscriber::registry()
        .with(config.env_filter())
        .with(
            (format == LogFormat::Pretty)
                .then(|| fmt::layer().pretty().with_writer(std::io::stderr)),
        )
        .with(
            (format == LogFormat::Compact)
                .then(|| fmt::layer().compact().with_writer(std::io::stderr)),
        )
        .with(
            (format == LogFormat::Json)
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = %config.log_filter, ?format, "diagnostics enabled");
    }
    installed
}
