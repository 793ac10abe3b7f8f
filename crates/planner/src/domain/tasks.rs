//! Task repository: CRUD, completion toggle, and filtering.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::dates;
use crate::entities::{NewTask, Task, TaskFilter, TaskPatch};
use crate::errors::{PlannerError, PlannerResult};
use crate::storage::Store;

/// Task repository operating on a shared store.
///
/// Every mutation is load-modify-persist against the full collection.
pub struct TaskRepository {
    store: Arc<dyn Store>,
}

impl TaskRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All tasks, in stored order
    pub async fn get_all(&self) -> PlannerResult<Vec<Task>> {
        self.store.load_tasks().await
    }

    /// A single task by id
    pub async fn get(&self, task_id: &str) -> PlannerResult<Task> {
        self.store
            .load_tasks()
            .await?
            .into_iter()
            .find(|t| t.id == task_id)
            .ok_or_else(|| PlannerError::TaskNotFound {
                task_id: task_id.to_string(),
            })
    }

    /// Create a task, applying field defaults: empty description, medium
    /// priority, due tomorrow, not completed.
    pub async fn create(&self, input: NewTask) -> PlannerResult<Task> {
        let title = required(input.title, "title")?;
        let category = required(input.category, "category")?;

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title,
            description: input.description.unwrap_or_default(),
            category,
            priority: input.priority.unwrap_or_default(),
            due_date: input.due_date.unwrap_or_else(dates::default_due_date),
            time: input.time.unwrap_or_default(),
            completed: false,
            created_at: Utc::now(),
        };

        let mut tasks = self.store.load_tasks().await?;
        tasks.push(task.clone());
        self.store.save_tasks(&tasks).await?;

        debug!(task_id = %task.id, category = %task.category, "created task");
        Ok(task)
    }

    /// Shallow-merge `patch` onto an existing task.
    ///
    /// The category reference is not re-validated here; a patch may leave
    /// a dangling category name.
    pub async fn update(&self, task_id: &str, patch: TaskPatch) -> PlannerResult<Task> {
        let mut tasks = self.store.load_tasks().await?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| PlannerError::TaskNotFound {
                task_id: task_id.to_string(),
            })?;

        task.apply(patch);
        let updated = task.clone();
        self.store.save_tasks(&tasks).await?;
        Ok(updated)
    }

    /// Delete a task. Missing ids are an error, matching the HTTP 404
    /// policy.
    pub async fn delete(&self, task_id: &str) -> PlannerResult<()> {
        let mut tasks = self.store.load_tasks().await?;
        let len_before = tasks.len();
        tasks.retain(|t| t.id != task_id);

        if tasks.len() == len_before {
            return Err(PlannerError::TaskNotFound {
                task_id: task_id.to_string(),
            });
        }

        self.store.save_tasks(&tasks).await
    }

    /// Flip the completion flag; calling twice restores the original value
    pub async fn toggle_completion(&self, task_id: &str) -> PlannerResult<Task> {
        let mut tasks = self.store.load_tasks().await?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| PlannerError::TaskNotFound {
                task_id: task_id.to_string(),
            })?;

        task.completed = !task.completed;
        let updated = task.clone();
        self.store.save_tasks(&tasks).await?;
        Ok(updated)
    }

    /// Tasks matching `filter`, sorted by due date ascending
    pub async fn filter(&self, filter: &TaskFilter) -> PlannerResult<Vec<Task>> {
        let mut tasks = self.store.load_tasks().await?;
        tasks.retain(|t| filter.matches(t));
        tasks.sort_by_key(|t| t.due_date);
        Ok(tasks)
    }
}

fn required(value: Option<String>, field: &'static str) -> PlannerResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PlannerError::MissingField { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TaskPriority;
    use crate::storage::MemoryStore;
    use chrono::Duration;

    fn repo() -> TaskRepository {
        TaskRepository::new(Arc::new(MemoryStore::new()))
    }

    fn new_task(title: &str, category: &str) -> NewTask {
        NewTask {
            title: Some(title.to_string()),
            category: Some(category.to_string()),
            ..NewTask::default()
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let repo = repo();
        let task = repo.create(new_task("Write report", "Work")).await.unwrap();

        assert!(!task.id.is_empty());
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(!task.completed);
        assert!(task.description.is_empty());
        assert_eq!(task.due_day(), dates::today() + Duration::days(1));
    }

    #[tokio::test]
    async fn test_create_requires_title_and_category() {
        let repo = repo();

        let err = repo
            .create(NewTask {
                category: Some("Work".to_string()),
                ..NewTask::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::MissingField { field: "title" }));

        let err = repo
            .create(NewTask {
                title: Some("X".to_string()),
                category: Some("   ".to_string()),
                ..NewTask::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PlannerError::MissingField { field: "category" }
        ));
    }

    #[tokio::test]
    async fn test_update_merges_partial_fields() {
        let repo = repo();
        let task = repo.create(new_task("Old", "Work")).await.unwrap();

        let updated = repo
            .update(
                &task.id,
                TaskPatch {
                    title: Some("New".to_string()),
                    priority: Some(TaskPriority::High),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.priority, TaskPriority::High);
        assert_eq!(updated.category, "Work");
        assert_eq!(updated.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_task_fails() {
        let repo = repo();
        let err = repo.update("nope", TaskPatch::default()).await.unwrap_err();
        assert!(matches!(err, PlannerError::TaskNotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_is_strict() {
        let repo = repo();
        let task = repo.create(new_task("X", "Work")).await.unwrap();

        repo.delete(&task.id).await.unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());

        let err = repo.delete(&task.id).await.unwrap_err();
        assert!(matches!(err, PlannerError::TaskNotFound { .. }));
    }

    #[tokio::test]
    async fn test_toggle_completion_is_its_own_inverse() {
        let repo = repo();
        let task = repo.create(new_task("X", "Work")).await.unwrap();

        let toggled = repo.toggle_completion(&task.id).await.unwrap();
        assert!(toggled.completed);

        let toggled = repo.toggle_completion(&task.id).await.unwrap();
        assert!(!toggled.completed);
    }

    #[tokio::test]
    async fn test_filter_completed_sorted_by_due_date() {
        let repo = repo();

        let mut later = new_task("Later", "Work");
        later.due_date = Some(Utc::now() + Duration::days(5));
        let later = repo.create(later).await.unwrap();

        let mut sooner = new_task("Sooner", "Work");
        sooner.due_date = Some(Utc::now() + Duration::days(2));
        let sooner = repo.create(sooner).await.unwrap();

        repo.create(new_task("Open", "Work")).await.unwrap();

        repo.toggle_completion(&later.id).await.unwrap();
        repo.toggle_completion(&sooner.id).await.unwrap();

        let done = repo
            .filter(&TaskFilter {
                completed: Some(true),
                ..TaskFilter::default()
            })
            .await
            .unwrap();

        assert_eq!(done.len(), 2);
        assert_eq!(done[0].id, sooner.id);
        assert_eq!(done[1].id, later.id);
        assert!(done.iter().all(|t| t.completed));
    }

    #[tokio::test]
    async fn test_filter_exact_day() {
        let repo = repo();

        let mut today_task = new_task("Today", "Work");
        today_task.due_date = Some(Utc::now());
        let today_task = repo.create(today_task).await.unwrap();

        repo.create(new_task("Tomorrow", "Work")).await.unwrap();

        let due_today = repo
            .filter(&TaskFilter {
                due_on: Some(dates::today()),
                ..TaskFilter::default()
            })
            .await
            .unwrap();

        assert_eq!(due_today.len(), 1);
        assert_eq!(due_today[0].id, today_task.id);
    }

    #[tokio::test]
    async fn test_filter_inclusive_date_range() {
        let repo = repo();

        let mut edge = new_task("Edge", "Work");
        edge.due_date = Some(Utc::now() + Duration::days(3));
        repo.create(edge).await.unwrap();

        let mut outside = new_task("Outside", "Work");
        outside.due_date = Some(Utc::now() + Duration::days(4));
        repo.create(outside).await.unwrap();

        let today = dates::today();
        let hits = repo
            .filter(&TaskFilter {
                due_between: Some((today, today + Duration::days(3))),
                ..TaskFilter::default()
            })
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Edge");
    }
}
