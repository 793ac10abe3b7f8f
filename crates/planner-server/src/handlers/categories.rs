//! Category route handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use planner::{Category, CategoryPatch, NewCategory};

use crate::error::ApiError;
use crate::server::SharedApp;

/// `GET /api/categories`
pub async fn list(State(app): State<SharedApp>) -> Result<Json<Vec<Category>>, ApiError> {
    let app = app.lock().await;
    Ok(Json(app.categories.get_all().await?))
}

/// `POST /api/categories` — create; 400 when name is missing
pub async fn create(
    State(app): State<SharedApp>,
    Json(input): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let app = app.lock().await;
    let category = app.categories.create(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// `PUT /api/categories/{id}` — 404 when absent, 400 when name is missing
pub async fn update(
    State(app): State<SharedApp>,
    Path(id): Path<String>,
    Json(patch): Json<CategoryPatch>,
) -> Result<Json<Category>, ApiError> {
    let app = app.lock().await;
    Ok(Json(app.categories.update(&id, patch).await?))
}

/// `DELETE /api/categories/{id}` — 204 on success, 404 when absent,
/// 400 while tasks still reference the category
pub async fn remove(
    State(app): State<SharedApp>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let app = app.lock().await;
    app.categories.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
