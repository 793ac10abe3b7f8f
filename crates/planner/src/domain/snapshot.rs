//! Portable snapshot export/import.
//!
//! A snapshot carries both full collections plus an export timestamp and a
//! fixed schema-version string. Import replaces each collection that is
//! present and well-formed and leaves the other untouched; ordering is
//! preserved on both sides, so `import(export())` is a no-op.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entities::{Category, Task};
use crate::errors::PlannerResult;
use crate::storage::Store;

/// Schema version written into every exported snapshot
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Full portable snapshot of the store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// Per-collection outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Number of tasks imported, when the snapshot carried a usable
    /// task sequence
    pub tasks: Option<usize>,

    /// Number of categories imported, likewise
    pub categories: Option<usize>,
}

/// Export/import facade over a shared store
pub struct SnapshotService {
    store: Arc<dyn Store>,
}

impl SnapshotService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Export both collections as a portable snapshot
    pub async fn export(&self) -> PlannerResult<Snapshot> {
        Ok(Snapshot {
            tasks: self.store.load_tasks().await?,
            categories: self.store.load_categories().await?,
            export_date: Utc::now(),
            version: SNAPSHOT_VERSION.to_string(),
        })
    }

    /// Import a snapshot value, replacing each collection that is present
    /// and deserializes as a record sequence. A missing or malformed half
    /// is skipped, leaving the stored collection untouched.
    pub async fn import(&self, raw: &serde_json::Value) -> PlannerResult<ImportOutcome> {
        let mut outcome = ImportOutcome::default();

        if let Some(value) = raw.get("tasks") {
            match serde_json::from_value::<Vec<Task>>(value.clone()) {
                Ok(tasks) => {
                    self.store.save_tasks(&tasks).await?;
                    outcome.tasks = Some(tasks.len());
                }
                Err(e) => warn!(error = %e, "skipping malformed task collection in import"),
            }
        }

        if let Some(value) = raw.get("categories") {
            match serde_json::from_value::<Vec<Category>>(value.clone()) {
                Ok(categories) => {
                    self.store.save_categories(&categories).await?;
                    outcome.categories = Some(categories.len());
                }
                Err(e) => warn!(error = %e, "skipping malformed category collection in import"),
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{seed_data, MemoryStore};
    use serde_json::json;

    async fn seeded_service() -> SnapshotService {
        let store = MemoryStore::new();
        store.initialize().await.unwrap();
        SnapshotService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_export_shape() {
        let service = seeded_service().await;
        let snapshot = service.export().await.unwrap();

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.tasks.len(), 2);
        assert_eq!(snapshot.categories.len(), 5);

        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value.get("exportDate").is_some());
    }

    #[tokio::test]
    async fn test_import_export_round_trip_preserves_collections() {
        let service = seeded_service().await;

        let before = service.export().await.unwrap();
        let raw = serde_json::to_value(&before).unwrap();
        let outcome = service.import(&raw).await.unwrap();

        assert_eq!(outcome.tasks, Some(2));
        assert_eq!(outcome.categories, Some(5));

        let after = service.export().await.unwrap();
        assert_eq!(after.tasks, before.tasks);
        assert_eq!(after.categories, before.categories);
    }

    #[tokio::test]
    async fn test_import_skips_missing_half() {
        let service = seeded_service().await;

        let outcome = service
            .import(&json!({ "categories": [] }))
            .await
            .unwrap();

        assert_eq!(outcome.tasks, None);
        assert_eq!(outcome.categories, Some(0));

        let snapshot = service.export().await.unwrap();
        assert_eq!(snapshot.tasks.len(), 2);
        assert!(snapshot.categories.is_empty());
    }

    #[tokio::test]
    async fn test_import_skips_malformed_half() {
        let store = Arc::new(MemoryStore::new());
        store
            .save_tasks(&seed_data().tasks)
            .await
            .unwrap();
        let service = SnapshotService::new(store);

        let outcome = service
            .import(&json!({ "tasks": "not a sequence" }))
            .await
            .unwrap();

        assert_eq!(outcome, ImportOutcome::default());
        assert_eq!(service.export().await.unwrap().tasks.len(), 2);
    }
}
