//! Router and shared state for the planner REST service.

use std::sync::Arc;

use axum::routing::{get, patch, put};
use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use planner::{CategoryRepository, StatisticsEngine, Store, TaskRepository};

use crate::handlers;

/// Application services over one shared store
pub struct App {
    pub tasks: TaskRepository,
    pub categories: CategoryRepository,
    pub statistics: StatisticsEngine,
}

impl App {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            tasks: TaskRepository::new(store.clone()),
            categories: CategoryRepository::new(store.clone()),
            statistics: StatisticsEngine::new(store),
        }
    }
}

/// Handlers lock the whole application, so each request's
/// read-modify-persist runs to completion before the next begins.
pub type SharedApp = Arc<Mutex<App>>;

/// Build the HTTP router for the planner service
pub fn build_router(app: SharedApp) -> Router {
    Router::new()
        .route(
            "/api/tasks",
            get(handlers::tasks::list).post(handlers::tasks::create),
        )
        .route(
            "/api/tasks/{id}",
            get(handlers::tasks::get)
                .put(handlers::tasks::update)
                .delete(handlers::tasks::remove),
        )
        .route("/api/tasks/{id}/toggle", patch(handlers::tasks::toggle))
        .route(
            "/api/categories",
            get(handlers::categories::list).post(handlers::categories::create),
        )
        .route(
            "/api/categories/{id}",
            put(handlers::categories::update).delete(handlers::categories::remove),
        )
        .route("/api/statistics", get(handlers::statistics::get))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app)
}

async fn health_check() -> &'static str {
    "ok"
}
