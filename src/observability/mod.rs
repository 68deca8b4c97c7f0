//! Tracing subscriber setup.
//!
//! The library itself only emits `tracing` events (targets `ticketing::http`,
//! `ticketing::executor`, `ticketing::config`). Applications that do not
//! install their own subscriber can use [`init_subscriber`].
//!
//! ```rust,ignore
//! use ticketing_sdk::observability::{init_subscriber, OutputFormat, SubscriberConfig};
//!
//! init_subscriber(SubscriberConfig {
//!     output_format: OutputFormat::Json,
//!     ..Default::default()
//! })?;
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::ServiceError;

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON lines
    Json,
}

/// Configuration for the tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    /// Level used when `RUST_LOG` is not set
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Include file and line of each event
    pub with_location: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
            with_location: false,
        }
    }
}

impl SubscriberConfig {
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = self.log_level.as_str().to_lowercase();
            EnvFilter::new(format!("{level},ticketing={level}"))
        })
    }
}

/// Install a global subscriber. Fails if one is already installed.
pub fn init_subscriber(config: SubscriberConfig) -> Result<(), ServiceError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    let result = match config.output_format {
        OutputFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(config.with_location)
                    .with_line_number(config.with_location),
            )
            .try_init(),
        OutputFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(config.with_location)
                    .with_line_number(config.with_location),
            )
            .try_init(),
    };
    result.map_err(|e| ServiceError::Configuration(format!("tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_text_at_info() {
        let config = SubscriberConfig::default();
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert!(!config.with_location);
    }
}
