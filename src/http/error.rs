//! API error responses.
//!
//! Errors are rendered as `{"detail": "<message>"}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::query::QueryError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The request body could not be read as the expected JSON.
    #[error("{}", rejection_text(.0))]
    InvalidBody(#[from] JsonRejection),

    #[error("Not Found")]
    RouteNotFound,
}

fn rejection_text(rejection: &JsonRejection) -> String {
    rejection.body_text()
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Query(QueryError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ApiError::from(QueryError::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Destination not found");
    }

    #[test]
    fn test_route_not_found() {
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.to_string(), "Not Found");
    }
}
