//! Storage trait definition and seed data.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Category, Task, TaskPriority};
use crate::errors::PlannerResult;

/// Persisted collections, exactly as written to the backing store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Storage interface for task and category persistence.
///
/// Backends hold full collections and rewrite them on every save; callers
/// serialize mutations (single writer).
#[async_trait]
pub trait Store: Send + Sync {
    /// Initialize the backing storage, seeding default data on first run
    /// or when the existing data is unreadable.
    async fn initialize(&self) -> PlannerResult<()>;

    /// Close and release resources
    async fn close(&self) -> PlannerResult<()>;

    /// Storage type identifier
    fn storage_type(&self) -> &'static str;

    /// Load all tasks
    async fn load_tasks(&self) -> PlannerResult<Vec<Task>>;

    /// Replace the task collection
    async fn save_tasks(&self, tasks: &[Task]) -> PlannerResult<()>;

    /// Load all categories
    async fn load_categories(&self) -> PlannerResult<Vec<Category>>;

    /// Replace the category collection
    async fn save_categories(&self, categories: &[Category]) -> PlannerResult<()>;
}

/// Default data seeded into an empty store: a handful of categories and
/// two sample tasks due in the next couple of days.
pub fn seed_data() -> StoreData {
    let categories = vec![
        Category::with_color(Uuid::new_v4().to_string(), "Cloud", "#3B82F6"),
        Category::with_color(Uuid::new_v4().to_string(), "DevOps", "#10B981"),
        Category::with_color(Uuid::new_v4().to_string(), "AI", "#8B5CF6"),
        Category::with_color(Uuid::new_v4().to_string(), "Backend", "#F59E0B"),
        Category::with_color(Uuid::new_v4().to_string(), "Frontend", "#EF4444"),
    ];

    let mut kubernetes = Task::new(
        Uuid::new_v4().to_string(),
        "Study Kubernetes networking",
        "Cloud",
    );
    kubernetes.description = "Learn about pods, services, and ingress".to_string();
    kubernetes.priority = TaskPriority::High;

    let mut spring = Task::new(
        Uuid::new_v4().to_string(),
        "Review Spring Boot security",
        "Backend",
    );
    spring.description = "Understand authentication and authorization".to_string();
    spring.due_date = Utc::now() + Duration::days(2);

    StoreData {
        tasks: vec![kubernetes, spring],
        categories,
    }
}
