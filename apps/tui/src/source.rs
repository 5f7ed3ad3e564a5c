use std::time::Duration;

use market_dashboard_core::{
    DashboardConfig, DashboardError, MarketData, MarketDataSource, MarketQuery, Suburb,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Market data over HTTP, shared by the interactive and headless modes.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(config: &DashboardConfig) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|error| DashboardError::Network(error.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn suburbs(&self) -> Result<Vec<Suburb>, DashboardError> {
        self.get_json(&format!("{}/api/suburbs", self.base_url)).await
    }

    pub async fn market_data(&self, query: &MarketQuery) -> Result<MarketData, DashboardError> {
        self.get_json(&query.url(&self.base_url)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DashboardError> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| self.classify(&error))?;

        check_status(response.status())?;

        response
            .json::<T>()
            .await
            .map_err(|error| self.classify(&error))
    }

    fn classify(&self, error: &reqwest::Error) -> DashboardError {
        if error.is_timeout() {
            DashboardError::Timeout(self.timeout)
        } else if error.is_decode() {
            DashboardError::Decode(error.to_string())
        } else {
            DashboardError::Network(error.to_string())
        }
    }
}

impl MarketDataSource for HttpSource {
    async fn fetch(&self, query: &MarketQuery) -> Result<MarketData, DashboardError> {
        self.market_data(query).await
    }
}

fn check_status(status: StatusCode) -> Result<(), DashboardError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(DashboardError::Fetch {
            status: status.as_u16(),
        })
    }
}
