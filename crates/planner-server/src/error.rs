//! HTTP mapping for core errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use planner::PlannerError;

/// Wrapper turning core errors into HTTP responses with a
/// `{"message": "..."}` body.
pub struct ApiError(PlannerError);

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PlannerError::TaskNotFound { .. } | PlannerError::CategoryNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            PlannerError::MissingField { .. }
            | PlannerError::InvalidPriority { .. }
            | PlannerError::CategoryInUse { .. } => StatusCode::BAD_REQUEST,
            PlannerError::FileReadError { .. }
            | PlannerError::FileWriteError { .. }
            | PlannerError::JsonParseError { .. }
            | PlannerError::StorageError { .. } => {
                error!(error = %self.0, "storage failure while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                PlannerError::TaskNotFound {
                    task_id: "1".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                PlannerError::MissingField { field: "title" },
                StatusCode::BAD_REQUEST,
            ),
            (
                PlannerError::CategoryInUse {
                    name: "Work".to_string(),
                    task_count: 1,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                PlannerError::StorageError {
                    reason: "disk full".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
