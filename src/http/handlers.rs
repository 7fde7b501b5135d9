//! Request handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::DestinationRecord;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::query::{SearchResponse, TravelQuery};

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "travel-assistant-api";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootMessage {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Travel Assistant API is running!".to_string(),
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// `GET /recommendations`
pub async fn list_recommendations(State(state): State<AppState>) -> Json<Vec<DestinationRecord>> {
    Json(state.query.list_all().to_vec())
}

/// `GET /recommendations/{destination}`
pub async fn get_recommendation(
    State(state): State<AppState>,
    Path(destination): Path<String>,
) -> Result<Json<DestinationRecord>, ApiError> {
    match state.query.find_by_destination(&destination) {
        Ok(record) => Ok(Json(record.clone())),
        Err(e) => {
            tracing::debug!(destination = %destination, "No destination matched lookup");
            Err(e.into())
        }
    }
}

/// `POST /search`
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<TravelQuery>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(query) = payload?;

    let response = state.query.search(&query);
    metrics::record_search_outcome(response.is_fallback());
    if response.is_fallback() {
        tracing::debug!(
            destination = %query.destination,
            budget = ?query.budget,
            "Search matched nothing, returning suggestions"
        );
    }

    Ok(Json(response))
}

/// Unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
