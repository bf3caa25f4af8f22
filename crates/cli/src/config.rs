//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CHEF_KISS_SEED_MENU` - Start with the house menu (default: true)
//! - `CHEF_KISS_LOG_FORMAT` - `text` or `json` (default: text)
//! - `RUST_LOG` - Tracing filter (default: `chef_kiss_cli=info,chef_kiss_core=info`)

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Start with the nine house dishes instead of an empty menu
    pub seed_menu: bool,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed_menu: true,
            log_format: LogFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(get_optional_env)
    }

    /// Build configuration from a variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognized value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed_menu = lookup("CHEF_KISS_SEED_MENU")
            .map(|value| parse_bool("CHEF_KISS_SEED_MENU", &value))
            .transpose()?
            .unwrap_or(true);
        let log_format = lookup("CHEF_KISS_LOG_FORMAT")
            .map(|value| parse_log_format("CHEF_KISS_LOG_FORMAT", &value))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            seed_menu,
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse a boolean flag value.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected true or false, got {other:?}"),
        )),
    }
}

/// Parse a log format name.
fn parse_log_format(key: &str, value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "text" | "pretty" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected text or json, got {other:?}"),
        )),
    }
}
