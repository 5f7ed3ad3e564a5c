//! API error types and their JSON responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter was absent or blank
    #[error("{0} is required")]
    MissingParameter(&'static str),

    /// The price series could not be fetched
    #[error("Failed to fetch data from API")]
    Upstream(#[from] UpstreamError),
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(source) => {
                tracing::error!(error = %source, "upstream fetch failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
