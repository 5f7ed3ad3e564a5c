use std::time::Duration;
use thiserror::Error;

/// Failure of a single dashboard refresh.
///
/// Every variant is local to one request; the user recovers by selecting again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The endpoint answered with a non-success status
    #[error("API error: {status}")]
    Fetch { status: u16 },

    /// The body was not JSON or did not match the market data shape
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl DashboardError {
    /// Message shown in the error panel.
    pub fn user_message(&self) -> String {
        format!("Failed to load market data: {self}")
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("unknown period: {0} (expected 1y, 5y, 10y or all)")]
    UnknownPeriod(String),

    #[error("invalid timeout `{0}`: expected a positive number of seconds")]
    InvalidTimeout(String),
}
