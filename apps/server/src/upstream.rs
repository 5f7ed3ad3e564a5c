//! Microburbs property market API client
//!
//! Fetches one metric series per request and keeps successful responses in a small LRU
//! cache keyed by property id and metric.

use hashlink::LruCache;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

use crate::config::ServerConfig;

/// Upstream responses kept in memory.
pub const CACHE_CAPACITY: usize = 32;

pub const DEFAULT_API_URL: &str = "https://www.microburbs.com.au/report_generator/api";

/// The sandbox key; it only serves the demo properties.
pub const SANDBOX_API_KEY: &str = "test";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    SellPrice,
    Yield,
}

impl Metric {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SellPrice => "sell_price",
            Self::Yield => "yield",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream returned {status}")]
    Status { status: u16 },

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Body of `GET /property/market`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketResponse {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub series: Vec<SeriesPoint>,
    #[serde(default)]
    pub property_transactions: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    #[serde(default)]
    pub suburb: AreaValue,
    #[serde(default)]
    pub sa3: AreaValue,
    #[serde(default)]
    pub cr: AreaValue,
}

/// One area's reading at a date; a missing value reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AreaValue {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub area_name: String,
}

impl AreaValue {
    pub fn value(&self) -> f64 {
        self.value.unwrap_or_default()
    }
}

type CacheKey = (String, Metric);

pub struct MicroburbsClient {
    client: Client,
    base_url: String,
    api_key: String,
    cache: Mutex<LruCache<CacheKey, Arc<MarketResponse>>>,
}

impl MicroburbsClient {
    pub fn new(config: &ServerConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(config.upstream_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            cache: Mutex::new(LruCache::new(CACHE_CAPACITY)),
        })
    }

    pub fn api_key_set(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub async fn fetch_market(
        &self,
        gnaf_id: &str,
        metric: Metric,
    ) -> Result<Arc<MarketResponse>, UpstreamError> {
        let key = (gnaf_id.to_string(), metric);
        if let Some(cached) = self.cached(&key) {
            tracing::debug!(gnaf_id, %metric, "upstream cache hit");
            return Ok(cached);
        }

        let url = format!("{}/property/market", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("id", gnaf_id), ("metric", metric.as_str())])
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                gnaf_id,
                %metric,
                status = status.as_u16(),
                body = %body,
                "upstream error"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let market = Arc::new(response.json::<MarketResponse>().await.map_err(classify)?);
        tracing::debug!(gnaf_id, %metric, points = market.series.len(), "fetched upstream series");

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, Arc::clone(&market));
        }
        Ok(market)
    }

    fn cached(&self, key: &CacheKey) -> Option<Arc<MarketResponse>> {
        self.cache.lock().ok()?.get(key).cloned()
    }
}

fn classify(error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Request(error)
    }
}
