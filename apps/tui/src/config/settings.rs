use dotenv::dotenv;
use market_dashboard_core::{ConfigError, DashboardConfig};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// API used when nothing else is configured; matches the server's default bind address.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Environment variables and the dashboard setting each one feeds.
const ENV_KEYS: [(&str, &str); 6] = [
    ("MARKET_API_URL", "api_url"),
    ("DASHBOARD_LOCATION", "location"),
    ("DASHBOARD_PERIOD", "period"),
    ("DASHBOARD_LOCALE", "locale"),
    ("DASHBOARD_CURRENCY", "currency"),
    ("REQUEST_TIMEOUT_SECS", "timeout"),
];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: ConfigError,
    },
}

/// Loads `.env` and builds the dashboard configuration from the process environment.
pub fn init_app_config() -> Result<DashboardConfig, SettingsError> {
    dotenv().ok();
    config_from_lookup(|var| env::var(var).ok())
}

/// Builds the configuration from any variable lookup, so callers can test without touching
/// the process environment.
pub fn config_from_lookup<F>(lookup: F) -> Result<DashboardConfig, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = DashboardConfig {
        api_base_url: DEFAULT_API_URL.to_string(),
        ..DashboardConfig::default()
    };

    for (var, key) in ENV_KEYS {
        if let Some(value) = lookup(var) {
            config
                .apply(key, &value)
                .map_err(|source| SettingsError::Invalid { var, source })?;
        }
    }

    if config.api_base_url.is_empty() {
        config.api_base_url = DEFAULT_API_URL.to_string();
    }

    Ok(config)
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}

/// Directory for the rolling log file.
pub fn log_dir() -> PathBuf {
    env::var("DASHBOARD_LOG_DIR").map_or_else(|_| PathBuf::from("./logs"), PathBuf::from)
}
