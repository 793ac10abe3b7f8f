//! Core entities: tasks and categories.

mod category;
mod task;

pub use category::{Category, CategoryPatch, NewCategory, DEFAULT_CATEGORY_COLOR};
pub use task::{NewTask, Task, TaskFilter, TaskPatch, TaskPriority};
