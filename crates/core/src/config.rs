use crate::error::ConfigError;
use crate::format::{Currency, Locale, MarketFormat};
use crate::period::Period;
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings shared by every front end.
///
/// Front ends gather `key=value` pairs from wherever they are configured (environment,
/// CLI flags, the page query string) and feed them through [`DashboardConfig::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base_url: String,
    pub format: MarketFormat,
    pub request_timeout: Duration,
    pub default_period: Period,
    pub default_location: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            format: MarketFormat::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            default_period: Period::default(),
            default_location: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            config.apply(key.as_ref(), value.as_ref())?;
        }
        Ok(config)
    }

    /// Applies one setting. Unknown keys are ignored.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_lowercase().as_str() {
            "api_url" => self.api_base_url = value.trim_end_matches('/').to_string(),
            "locale" => self.format.locale = Locale::parse(value)?,
            "currency" => self.format.currency = Currency::parse(value)?,
            "timeout" => self.request_timeout = parse_timeout(value)?,
            "period" => {
                self.default_period = Period::parse(value)
                    .ok_or_else(|| ConfigError::UnknownPeriod(value.to_string()))?;
            }
            "location" => {
                self.default_location = (!value.is_empty()).then(|| value.to_string());
            }
            other => tracing::debug!(key = other, "ignoring unknown setting"),
        }
        Ok(())
    }

    pub fn suburbs_url(&self) -> String {
        format!("{}/api/suburbs", self.api_base_url)
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(ConfigError::InvalidTimeout(value.to_string())),
    }
}
