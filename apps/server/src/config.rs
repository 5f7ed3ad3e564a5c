use dotenv::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::upstream::{DEFAULT_API_URL, DEFAULT_TIMEOUT, SANDBOX_API_KEY};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub api_base_url: String,
    pub api_key: String,
    pub upstream_timeout: Duration,
    /// Built web dashboard served at `/` when set
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address `{0}`")]
    BindAddr(String),

    #[error("invalid upstream timeout `{0}`: expected a positive number of seconds")]
    Timeout(String),
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            api_base_url: DEFAULT_API_URL.to_string(),
            api_key: SANDBOX_API_KEY.to_string(),
            upstream_timeout: DEFAULT_TIMEOUT,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Loads `.env` and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("MARKET_SERVER_ADDR") {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|_| ConfigError::BindAddr(addr.clone()))?;
        }
        if let Some(url) = lookup("MICROBURBS_API_URL").filter(|url| !url.trim().is_empty()) {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(key) = lookup("MICROBURBS_API_KEY") {
            config.api_key = key;
        }
        if let Some(timeout) = lookup("UPSTREAM_TIMEOUT_SECS") {
            config.upstream_timeout = match timeout.trim().parse::<u64>() {
                Ok(seconds) if seconds > 0 => Duration::from_secs(seconds),
                _ => return Err(ConfigError::Timeout(timeout)),
            };
        }
        config.static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// The key as it may appear in logs.
    pub fn api_key_label(&self) -> &str {
        if self.api_key == SANDBOX_API_KEY {
            "test (sandbox)"
        } else if self.api_key.is_empty() {
            "(unset)"
        } else {
            "(set)"
        }
    }
}
