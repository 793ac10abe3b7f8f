//! Statistics route handler.

use axum::extract::State;
use axum::Json;

use planner::Statistics;

use crate::error::ApiError;
use crate::server::SharedApp;

/// `GET /api/statistics` — aggregate snapshot, recomputed per call
pub async fn get(State(app): State<SharedApp>) -> Result<Json<Statistics>, ApiError> {
    let app = app.lock().await;
    Ok(Json(app.statistics.get().await?))
}
