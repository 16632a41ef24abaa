use clap::ValueEnum;

use crate::resilience::retry::RetrySettings;
use crate::utils::constants::{AUTH_PATH, BASE_URL, USERS_PATH};

/// ================================
/// BADSEC client settings
/// ================================
///
/// The binary always runs with `ClientConfig::default()`, which is built from
/// the fixed constants. Tests point `base_url` at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_path: String,
    /// also the path part of the request checksum
    pub users_path: String,
    pub retry: RetrySettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            auth_path: AUTH_PATH.to_owned(),
            users_path: USERS_PATH.to_owned(),
            retry: RetrySettings::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn auth_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.auth_path)
    }

    pub fn users_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.users_path)
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Compact,
}
