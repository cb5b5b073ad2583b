//! Host configuration read from the process environment.

use thiserror::Error;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected an integer in 1..=65535")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Settings the host needs before it can bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api_base_url: String,
}

impl HostConfig {
    /// Read `PORT` and `API_BASE_URL` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("PORT").ok(), std::env::var("API_BASE_URL").ok())
    }

    /// Build from raw variable values; `None` means unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `port` does not parse to a non-zero `u16`.
    pub fn from_vars(port: Option<String>, api_base_url: Option<String>) -> Result<Self, ConfigError> {
        let port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(p) if p != 0 => p,
                _ => return Err(ConfigError::InvalidPort(raw.to_owned())),
            },
        };
        let api = match api_base_url {
            Some(url) if !url.trim().is_empty() => client::config::ApiConfig::new(&url),
            _ => client::config::ApiConfig::default(),
        };
        Ok(Self { port, api_base_url: api.base_url().to_owned() })
    }

    #[must_use]
    pub fn api_config(&self) -> client::config::ApiConfig {
        client::config::ApiConfig::new(&self.api_base_url)
    }
}
