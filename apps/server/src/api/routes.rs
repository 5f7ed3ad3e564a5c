//! Route handlers.
//!
//! - GET /api/suburbs - Demo suburbs the selector offers
//! - GET /api/market-data?gnaf_id=..&period=.. - Dashboard payload for one property
//! - GET /api/health - Liveness and configuration summary

use axum::{
    extract::{Query, State},
    Json,
};
use market_dashboard_core::{MarketData, Period, Suburb};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::market::build_market_data;
use crate::upstream::Metric;

#[derive(Debug, Deserialize)]
pub struct MarketDataParams {
    pub gnaf_id: Option<String>,
    pub period: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub api_key_set: bool,
    pub demo_suburbs: usize,
}

/// GET /api/suburbs
pub async fn suburbs(State(state): State<Arc<AppState>>) -> Json<Vec<Suburb>> {
    Json(state.suburbs.clone())
}

/// GET /api/market-data
///
/// Unknown or absent periods mean all time. A failed yield fetch only drops the yield chart;
/// a failed price fetch fails the request.
pub async fn market_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MarketDataParams>,
) -> ApiResult<Json<MarketData>> {
    let gnaf_id = params
        .gnaf_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingParameter("gnaf_id"))?;

    let period = params
        .period
        .as_deref()
        .and_then(Period::parse)
        .unwrap_or(Period::All);

    let (price, yields) = tokio::join!(
        state.upstream.fetch_market(gnaf_id, Metric::SellPrice),
        state.upstream.fetch_market(gnaf_id, Metric::Yield),
    );

    let price = price?;
    let yields = match yields {
        Ok(yields) => Some(yields),
        Err(error) => {
            tracing::warn!(gnaf_id, %error, "yield series unavailable");
            None
        }
    };

    let today = chrono::Local::now().date_naive();
    let data = build_market_data(&price, yields.as_deref(), period, today);

    tracing::info!(
        gnaf_id,
        %period,
        points = data.price_series.len(),
        "market data served"
    );

    Ok(Json(data))
}

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        api_key_set: state.upstream.api_key_set(),
        demo_suburbs: state.suburbs.len(),
    })
}
