//! Statistics engine: aggregate counts derived from one snapshot of the
//! task and category collections. Nothing here is persisted or cached;
//! every call recomputes in full.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::dates;
use crate::entities::{Category, Task};
use crate::errors::PlannerResult;
use crate::storage::Store;

/// Derived aggregate counts over the current collections
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Percentage of completed tasks, rounded to 2 decimal places;
    /// 0 when there are no tasks
    pub completion_rate: f64,
    pub tasks_by_category: Vec<CategoryProgress>,
    pub tasks_this_week: usize,
    pub upcoming_tasks: usize,
    pub overdue_tasks: usize,
    pub today_tasks: usize,
    pub tomorrow_tasks: usize,
}

/// Per-category progress entry. Categories with no tasks still appear
/// with zeroed counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category: String,
    pub total: usize,
    pub completed: usize,
    pub color: String,
}

/// Compute statistics for one snapshot of the collections, relative to
/// the given local calendar day.
///
/// `today`/`tomorrow`/`this week` count completed and incomplete tasks
/// alike; `overdue` and `upcoming` exclude completed tasks.
pub fn compute(tasks: &[Task], categories: &[Category], today: NaiveDate) -> Statistics {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|t| t.completed).count();
    let completion_rate = if total_tasks > 0 {
        round2(completed_tasks as f64 / total_tasks as f64 * 100.0)
    } else {
        0.0
    };

    let tasks_by_category = categories
        .iter()
        .map(|category| CategoryProgress {
            category: category.name.clone(),
            total: tasks.iter().filter(|t| t.category == category.name).count(),
            completed: tasks
                .iter()
                .filter(|t| t.category == category.name && t.completed)
                .count(),
            color: category.color.clone(),
        })
        .collect();

    let tomorrow = today + Duration::days(1);

    Statistics {
        total_tasks,
        completed_tasks,
        completion_rate,
        tasks_by_category,
        tasks_this_week: tasks.iter().filter(|t| t.is_due_this_week(today)).count(),
        upcoming_tasks: tasks.iter().filter(|t| t.is_upcoming(today)).count(),
        overdue_tasks: tasks.iter().filter(|t| t.is_overdue(today)).count(),
        today_tasks: tasks.iter().filter(|t| t.is_due_on(today)).count(),
        tomorrow_tasks: tasks.iter().filter(|t| t.is_due_on(tomorrow)).count(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Statistics facade reading one snapshot from the store per call
pub struct StatisticsEngine {
    store: Arc<dyn Store>,
}

impl StatisticsEngine {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Statistics relative to the current local day
    pub async fn get(&self) -> PlannerResult<Statistics> {
        let tasks = self.store.load_tasks().await?;
        let categories = self.store.load_categories().await?;
        Ok(compute(&tasks, &categories, dates::today()))
    }
}
