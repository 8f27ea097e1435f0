use std::env;
use std::str::FromStr;

use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: Level,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Defaults for the command-line program: quiet, human-readable.
    #[must_use]
    pub fn cli_defaults() -> Self {
        Self {
            log_level: Level::WARN,
            log_format: LogFormat::Text,
        }
    }

    pub fn from_env() -> Result<Self, String> {
        Self::from_env_with(Self::default())
    }

    /// Reads `LOG_LEVEL` and `LOG_FORMAT`, keeping `defaults` for unset ones.
    pub fn from_env_with(defaults: Self) -> Result<Self, String> {
        Self::from_lookup(defaults, |key| env::var(key).ok())
    }

    fn from_lookup(
        defaults: Self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw
                .parse::<Level>()
                .map_err(|e| format!("LOG_LEVEL: {}", e))?,
            None => defaults.log_level,
        };
        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| format!("LOG_FORMAT: {}", e))?,
            None => defaults.log_format,
        };
        Ok(Self {
            log_level,
            log_format,
        })
    }
}
