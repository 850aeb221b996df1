//! Configuration Module
//!
//! Loads logging configuration from environment variables.

use std::env;

const DEFAULT_LOG_FILTER: &str = "apikey_json=info";

/// Logging configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Filter directive used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Emit log lines as JSON instead of human-readable text
    pub log_json: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LOG_FILTER` - Fallback filter directive (default: `apikey_json=info`)
    /// - `LOG_JSON` - `true` or `1` for JSON output (default: false)
    pub fn from_env() -> Self {
        Self {
            log_filter: env::var("LOG_FILTER")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_json: env::var("LOG_JSON")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_filter, "apikey_json=info");
        assert!(!config.log_json);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the env vars to avoid races between tests
        env::remove_var("LOG_FILTER");
        env::remove_var("LOG_JSON");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("LOG_FILTER", "debug");
        env::set_var("LOG_JSON", "TRUE");
        let config = Config::from_env();
        assert_eq!(config.log_filter, "debug");
        assert!(config.log_json);

        env::remove_var("LOG_FILTER");
        env::remove_var("LOG_JSON");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }
}
