//! Configuration loading and constants.
//!
//! The probe target is fixed at compile time. The only runtime configuration is
//! an optional TOML file controlling log output; it never reaches the request.

use reqwest::StatusCode;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Probe Target
// =============================================================================

/// Endpoint checked by every probe run
pub const TARGET_URL: &str = "http://localhost:8080/hello";

/// The only status treated as healthy
pub const EXPECTED_STATUS: StatusCode = StatusCode::OK;

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set.
/// Quiet on success, one line on failure.
pub const DEFAULT_LOG_FILTER: &str = "hello_probe=warn";

/// Default log format
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Text;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: LogFormat,
    /// Filter used when neither --log-level nor RUST_LOG is given
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
            filter: None,
        }
    }
}

impl LoggingConfig {
    fn default_format() -> LogFormat {
        DEFAULT_LOG_FORMAT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl ProbeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ProbeConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the log filter with priority: CLI > env > config file > default.
    pub fn log_filter(&self, cli: Option<String>, env: Option<String>) -> String {
        cli.or(env)
            .or_else(|| self.logging.filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
