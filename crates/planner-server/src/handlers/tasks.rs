//! Task route handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use planner::{dates, NewTask, Task, TaskFilter, TaskPatch};

use crate::error::ApiError;
use crate::server::SharedApp;

/// Query parameters for `GET /api/tasks`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub completed: Option<bool>,
    pub upcoming: Option<bool>,
}

/// `GET /api/tasks` — filtered list, sorted by due date ascending
pub async fn list(
    State(app): State<SharedApp>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let app = app.lock().await;

    let filter = TaskFilter {
        category: query.category,
        completed: query.completed,
        ..TaskFilter::default()
    };
    let mut tasks = app.tasks.filter(&filter).await?;

    if query.upcoming.unwrap_or(false) {
        let today = dates::today();
        tasks.retain(|t| t.is_upcoming(today));
    }

    Ok(Json(tasks))
}

/// `POST /api/tasks` — create; 400 when title or category is missing
pub async fn create(
    State(app): State<SharedApp>,
    Json(input): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let app = app.lock().await;
    let task = app.tasks.create(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /api/tasks/{id}` — 404 when absent
pub async fn get(
    State(app): State<SharedApp>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let app = app.lock().await;
    Ok(Json(app.tasks.get(&id).await?))
}

/// `PUT /api/tasks/{id}` — partial merge; 404 when absent
pub async fn update(
    State(app): State<SharedApp>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    let app = app.lock().await;
    Ok(Json(app.tasks.update(&id, patch).await?))
}

/// `DELETE /api/tasks/{id}` — 204 on success, 404 when absent
pub async fn remove(
    State(app): State<SharedApp>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let app = app.lock().await;
    app.tasks.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /api/tasks/{id}/toggle` — flip completion; 404 when absent
pub async fn toggle(
    State(app): State<SharedApp>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let app = app.lock().await;
    Ok(Json(app.tasks.toggle_completion(&id).await?))
}
