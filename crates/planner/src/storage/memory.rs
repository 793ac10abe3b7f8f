//! In-memory key-value storage, the analogue of the browser's local
//! storage area: fixed keys, values holding a JSON-serialized collection.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::traits::{seed_data, Store, StoreData};
use crate::entities::{Category, Task};
use crate::errors::PlannerResult;

const TASKS_KEY: &str = "taskPlanner_tasks";
const CATEGORIES_KEY: &str = "taskPlanner_categories";

/// In-memory store for the client-only deployment variant and for tests.
///
/// Starts empty; `initialize` seeds default data into any absent key.
pub struct MemoryStore {
    entries: RwLock<HashMap<&'static str, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    async fn load<T: serde::de::DeserializeOwned>(&self, key: &str) -> PlannerResult<Vec<T>> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save<T: serde::Serialize>(&self, key: &'static str, items: &[T]) -> PlannerResult<()> {
        let raw = serde_json::to_string(items)?;
        self.entries.write().await.insert(key, raw);
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn initialize(&self) -> PlannerResult<()> {
        let seed = seed_data();
        let mut entries = self.entries.write().await;
        if !entries.contains_key(CATEGORIES_KEY) {
            entries.insert(CATEGORIES_KEY, serde_json::to_string(&seed.categories)?);
        }
        if !entries.contains_key(TASKS_KEY) {
            entries.insert(TASKS_KEY, serde_json::to_string(&seed.tasks)?);
        }
        Ok(())
    }

    async fn close(&self) -> PlannerResult<()> {
        Ok(())
    }

    fn storage_type(&self) -> &'static str {
        "memory"
    }

    async fn load_tasks(&self) -> PlannerResult<Vec<Task>> {
        self.load(TASKS_KEY).await
    }

    async fn save_tasks(&self, tasks: &[Task]) -> PlannerResult<()> {
        self.save(TASKS_KEY, tasks).await
    }

    async fn load_categories(&self) -> PlannerResult<Vec<Category>> {
        self.load(CATEGORIES_KEY).await
    }

    async fn save_categories(&self, categories: &[Category]) -> PlannerResult<()> {
        self.save(CATEGORIES_KEY, categories).await
    }
}
