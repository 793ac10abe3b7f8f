//! File-backed storage: one JSON document rewritten in full per save.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{info, warn};

use super::traits::{seed_data, Store, StoreData};
use crate::entities::{Category, Task};
use crate::errors::{PlannerError, PlannerResult};

/// File-backed store holding `{ "tasks": [...], "categories": [...] }`
/// in a single JSON document.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_data(&self) -> PlannerResult<StoreData> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let data: StoreData = serde_json::from_str(&content)?;
                Ok(data)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "data file missing, treating store as empty");
                Ok(StoreData::default())
            }
            Err(e) => Err(PlannerError::FileReadError {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn write_data(&self, data: &StoreData) -> PlannerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| PlannerError::FileWriteError {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Store for FileStore {
    async fn initialize(&self) -> PlannerResult<()> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                if serde_json::from_str::<StoreData>(&content).is_ok() {
                    return Ok(());
                }
                warn!(path = %self.path.display(), "data file unreadable, reseeding with defaults");
                self.write_data(&seed_data()).await
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "creating data file with default seed data");
                self.write_data(&seed_data()).await
            }
            Err(e) => Err(PlannerError::FileReadError {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn close(&self) -> PlannerResult<()> {
        Ok(())
    }

    fn storage_type(&self) -> &'static str {
        "file"
    }

    async fn load_tasks(&self) -> PlannerResult<Vec<Task>> {
        Ok(self.read_data().await?.tasks)
    }

    async fn save_tasks(&self, tasks: &[Task]) -> PlannerResult<()> {
        // Read-modify-write so the category half of the document survives
        let mut data = self.read_data().await?;
        data.tasks = tasks.to_vec();
        self.write_data(&data).await
    }

    async fn load_categories(&self) -> PlannerResult<Vec<Category>> {
        Ok(self.read_data().await?.categories)
    }

    async fn save_categories(&self, categories: &[Category]) -> PlannerResult<()> {
        let mut data = self.read_data().await?;
        data.categories = categories.to_vec();
        self.write_data(&data).await
    }
}
