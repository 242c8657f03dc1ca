//! REPL configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Deployment environment, from `ENVIRONMENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl Environment {
    /// Log filter used when neither `CALC_LOG` nor `RUST_LOG` is set
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Testing | Environment::Production => "warn",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEVELOPMENT" | "DEV" => Ok(Environment::Development),
            "TESTING" | "TEST" => Ok(Environment::Testing),
            "PRODUCTION" | "PROD" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue("ENVIRONMENT".to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Development => "DEVELOPMENT",
            Environment::Testing => "TESTING",
            Environment::Production => "PRODUCTION",
        })
    }
}

/// REPL configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment (default: PRODUCTION)
    pub environment: Environment,

    /// Log filter directive from `CALC_LOG`, falling back to `RUST_LOG`
    pub log_filter: Option<String>,

    /// Plugin allow-list from `CALC_PLUGINS`. `None` loads every bundled plugin.
    pub plugins: Option<Vec<String>>,

    /// Prompt printed before each input line
    pub prompt: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment: Environment = lookup("ENVIRONMENT")
            .unwrap_or_else(|| "PRODUCTION".to_string())
            .parse()?;

        let log_filter = lookup("CALC_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|filter| !filter.trim().is_empty());

        let plugins = lookup("CALC_PLUGINS").map(|list| parse_plugin_list(&list));
        if let Some(names) = &plugins {
            if let Some(bad) = names.iter().find(|name| name.chars().any(char::is_whitespace)) {
                return Err(ConfigError::InvalidPluginName(bad.clone()));
            }
        }

        let prompt = lookup("CALC_PROMPT").unwrap_or_else(|| "> ".to_string());

        Ok(AppConfig {
            environment,
            log_filter,
            plugins,
            prompt,
        })
    }

    /// Effective log filter directive
    pub fn log_directive(&self) -> &str {
        self.log_filter
            .as_deref()
            .unwrap_or_else(|| self.environment.default_log_filter())
    }
}

/// Split a comma separated plugin list, dropping empty entries.
fn parse_plugin_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid plugin name in CALC_PLUGINS: '{0}'")]
    InvalidPluginName(String),

    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidLogFilter { directive: String, reason: String },
}
