//! Configuration System
//!
//! Handles loading configuration from TOML and environment-style overrides.
//! The browser bundle resolves overrides at build time, native hosts read the
//! process environment.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub analytics: AnalyticsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which authenticator the session manager is built with.
///
/// Fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Credentials are checked locally against the demo identity
    #[default]
    Demo,
    /// Credentials are posted to the remote login endpoint
    Live,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Demo => "demo",
            AuthMode::Live => "live",
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, AuthMode::Demo)
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" | "true" | "1" => Ok(AuthMode::Demo),
            "live" | "false" | "0" => Ok(AuthMode::Live),
            other => Err(ConfigError::InvalidValue {
                key: ENV_AUTH_MODE.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub mode: AuthMode,

    #[serde(default = "default_login_url")]
    pub login_url: String,

    #[serde(default = "default_demo_delay")]
    pub demo_delay_ms: u64,
}

fn default_login_url() -> String {
    "https://reqres.in/api/login".to_string()
}

fn default_demo_delay() -> u64 {
    500
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::default(),
            login_url: default_login_url(),
            demo_delay_ms: default_demo_delay(),
        }
    }
}

impl AuthConfig {
    pub fn demo_delay(&self) -> Duration {
        Duration::from_millis(self.demo_delay_ms)
    }
}

/// Analytics data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_todos_url")]
    pub todos_url: String,
}

fn default_todos_url() -> String {
    "https://jsonplaceholder.typicode.com/todos".to_string()
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            todos_url: default_todos_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub const ENV_AUTH_MODE: &str = "PORTAL_AUTH_MODE";
pub const ENV_LOGIN_URL: &str = "PORTAL_LOGIN_URL";
pub const ENV_TODOS_URL: &str = "PORTAL_TODOS_URL";
pub const ENV_LOG_LEVEL: &str = "PORTAL_LOG_LEVEL";

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides resolved by `lookup`.
    ///
    /// Empty values are ignored so an unset build variable never clobbers a
    /// value from the TOML file.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(mode) = lookup(ENV_AUTH_MODE) {
            self.auth.mode = mode.parse()?;
        }
        if let Some(url) = lookup(ENV_LOGIN_URL) {
            self.auth.login_url = url;
        }
        if let Some(url) = lookup(ENV_TODOS_URL) {
            self.analytics.todos_url = url;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.auth.mode, AuthMode::Demo);
        assert_eq!(config.auth.login_url, "https://reqres.in/api/login");
        assert_eq!(config.auth.demo_delay(), Duration::from_millis(500));
        assert_eq!(
            config.analytics.todos_url,
            "https://jsonplaceholder.typicode.com/todos"
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = Config::from_toml_str(
            r#"
            [auth]
            mode = "live"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.mode, AuthMode::Live);
        assert_eq!(config.auth.demo_delay_ms, 500);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = Config::from_toml_str("[auth]\nmode = \"staging\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_AUTH_MODE, "LIVE"),
            (ENV_TODOS_URL, "http://localhost:9000/todos"),
            (ENV_LOG_LEVEL, ""),
        ]);

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.auth.mode, AuthMode::Live);
        assert_eq!(config.analytics.todos_url, "http://localhost:9000/todos");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_mode_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| (key == ENV_AUTH_MODE).then(|| "sometimes".to_string()))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid value for PORTAL_AUTH_MODE: \"sometimes\""
        );
    }

    #[test]
    fn test_mode_flag_aliases() {
        assert_eq!("true".parse::<AuthMode>().unwrap(), AuthMode::Demo);
        assert_eq!("false".parse::<AuthMode>().unwrap(), AuthMode::Live);
        assert!(AuthMode::Demo.is_demo());
        assert_eq!(AuthMode::Live.to_string(), "live");
    }
}
