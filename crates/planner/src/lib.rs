#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

//! # Planner
//!
//! Core library for a personal task planner:
//! - Task and category records with JSON persistence
//! - Repositories for CRUD, completion toggles, and filtering
//! - A statistics engine deriving counts and per-category progress
//! - Portable snapshot export/import
//!
//! Two storage backends satisfy the same [`Store`] contract: a JSON file
//! rewritten in full on every mutation, and an in-memory key-value map.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use planner::{FileStore, Store, TaskRepository};
//!
//! let store: Arc<dyn Store> = Arc::new(FileStore::new("data/planner.json"));
//! store.initialize().await?;
//!
//! let tasks = TaskRepository::new(store);
//! let all = tasks.get_all().await?;
//! ```

// Date-window helpers
pub mod dates;

// Repositories, statistics, snapshots
pub mod domain;

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Storage layer
pub mod storage;

// Re-export key types for convenience
pub use domain::{
    CategoryProgress, CategoryRepository, ImportOutcome, Snapshot, SnapshotService, Statistics,
    StatisticsEngine, TaskRepository, SNAPSHOT_VERSION,
};
pub use entities::{
    Category, CategoryPatch, NewCategory, NewTask, Task, TaskFilter, TaskPatch, TaskPriority,
};
pub use errors::{PlannerError, PlannerResult};
pub use storage::{FileStore, MemoryStore, Store, StoreData};
