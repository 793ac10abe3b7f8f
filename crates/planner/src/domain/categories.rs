//! Category repository: CRUD with the in-use delete guard.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::entities::{Category, CategoryPatch, NewCategory, DEFAULT_CATEGORY_COLOR};
use crate::errors::{PlannerError, PlannerResult};
use crate::storage::Store;

/// Category repository operating on a shared store
pub struct CategoryRepository {
    store: Arc<dyn Store>,
}

impl CategoryRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All categories, in stored order
    pub async fn get_all(&self) -> PlannerResult<Vec<Category>> {
        self.store.load_categories().await
    }

    /// A single category by id
    pub async fn get(&self, category_id: &str) -> PlannerResult<Category> {
        self.store
            .load_categories()
            .await?
            .into_iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| PlannerError::CategoryNotFound {
                category_id: category_id.to_string(),
            })
    }

    /// Create a category; `color` defaults to a neutral gray
    pub async fn create(&self, input: NewCategory) -> PlannerResult<Category> {
        let name = required_name(input.name)?;

        let category = Category {
            id: Uuid::new_v4().to_string(),
            name,
            color: input
                .color
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
        };

        let mut categories = self.store.load_categories().await?;
        categories.push(category.clone());
        self.store.save_categories(&categories).await?;

        debug!(category_id = %category.id, name = %category.name, "created category");
        Ok(category)
    }

    /// Rename and recolor a category. `name` is required; `color` is kept
    /// when not provided.
    ///
    /// Tasks keep the old name string after a rename, so they silently
    /// detach from the renamed category.
    pub async fn update(&self, category_id: &str, patch: CategoryPatch) -> PlannerResult<Category> {
        let mut categories = self.store.load_categories().await?;
        let category = categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| PlannerError::CategoryNotFound {
                category_id: category_id.to_string(),
            })?;

        category.name = required_name(patch.name)?;
        if let Some(color) = patch.color {
            category.color = color;
        }

        let updated = category.clone();
        self.store.save_categories(&categories).await?;
        Ok(updated)
    }

    /// Delete a category, unless any task still references it by name.
    ///
    /// The dependent-task count is re-scanned from the live task collection
    /// at call time, not maintained incrementally.
    pub async fn delete(&self, category_id: &str) -> PlannerResult<()> {
        let mut categories = self.store.load_categories().await?;
        let category = categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| PlannerError::CategoryNotFound {
                category_id: category_id.to_string(),
            })?;

        let tasks = self.store.load_tasks().await?;
        let task_count = tasks.iter().filter(|t| t.category == category.name).count();
        if task_count > 0 {
            return Err(PlannerError::CategoryInUse {
                name: category.name.clone(),
                task_count,
            });
        }

        categories.retain(|c| c.id != category_id);
        self.store.save_categories(&categories).await
    }
}

fn required_name(value: Option<String>) -> PlannerResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PlannerError::MissingField { field: "name" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskRepository;
    use crate::entities::NewTask;
    use crate::storage::MemoryStore;

    fn repos() -> (CategoryRepository, TaskRepository) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        (
            CategoryRepository::new(store.clone()),
            TaskRepository::new(store),
        )
    }

    fn new_category(name: &str) -> NewCategory {
        NewCategory {
            name: Some(name.to_string()),
            ..NewCategory::default()
        }
    }

    #[tokio::test]
    async fn test_create_defaults_color() {
        let (categories, _) = repos();
        let category = categories.create(new_category("Work")).await.unwrap();
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let (categories, _) = repos();
        let err = categories.create(NewCategory::default()).await.unwrap_err();
        assert!(matches!(err, PlannerError::MissingField { field: "name" }));
    }

    #[tokio::test]
    async fn test_update_requires_name_keeps_color() {
        let (categories, _) = repos();
        let category = categories
            .create(NewCategory {
                name: Some("Work".to_string()),
                color: Some("#111111".to_string()),
            })
            .await
            .unwrap();

        let err = categories
            .update(&category.id, CategoryPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::MissingField { field: "name" }));

        let updated = categories
            .update(
                &category.id,
                CategoryPatch {
                    name: Some("Office".to_string()),
                    color: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Office");
        assert_eq!(updated.color, "#111111");
    }

    #[tokio::test]
    async fn test_delete_blocked_while_in_use() {
        let (categories, tasks) = repos();
        let category = categories.create(new_category("Work")).await.unwrap();

        let task = tasks
            .create(NewTask {
                title: Some("X".to_string()),
                category: Some("Work".to_string()),
                ..NewTask::default()
            })
            .await
            .unwrap();

        let err = categories.delete(&category.id).await.unwrap_err();
        assert!(matches!(
            err,
            PlannerError::CategoryInUse { task_count: 1, .. }
        ));

        // Once the dependent task is gone, deletion proceeds
        tasks.delete(&task.id).await.unwrap();
        categories.delete(&category.id).await.unwrap();
        assert!(categories.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_category_fails() {
        let (categories, _) = repos();
        let err = categories.delete("nope").await.unwrap_err();
        assert!(matches!(err, PlannerError::CategoryNotFound { .. }));
    }
}
