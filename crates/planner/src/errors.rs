//! Error types for the planner crate.

use thiserror::Error;

/// Error kinds surfaced by repositories, storage, and import/export
#[derive(Error, Debug, Clone)]
pub enum PlannerError {
    // Lookup errors
    #[error("Task '{task_id}' not found")]
    TaskNotFound { task_id: String },

    #[error("Category '{category_id}' not found")]
    CategoryNotFound { category_id: String },

    // Validation errors
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid priority: '{priority}'")]
    InvalidPriority { priority: String },

    // Referential guard
    #[error("Category '{name}' is used by {task_count} task(s) and cannot be deleted")]
    CategoryInUse { name: String, task_count: usize },

    // Storage errors
    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    #[error("Storage error: {reason}")]
    StorageError { reason: String },
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
