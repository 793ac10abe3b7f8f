//! Task entity and related types.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::errors::PlannerError;

/// Task priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(PlannerError::InvalidPriority {
                priority: s.to_string(),
            }),
        }
    }
}

/// Core task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Brief, descriptive title
    pub title: String,

    /// Longer free-form description
    #[serde(default)]
    pub description: String,

    /// Name of the category this task belongs to.
    ///
    /// Tasks reference categories by name, not id. Renaming or deleting a
    /// category can leave this dangling; only category deletion guards
    /// against it.
    pub category: String,

    /// Task priority level
    #[serde(default)]
    pub priority: TaskPriority,

    /// When the task is due
    #[serde(rename = "dueDate")]
    pub due_date: DateTime<Utc>,

    /// Optional time-of-day label shown alongside the due date
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// Set once at creation, never mutated
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task with the default field values
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            priority: TaskPriority::default(),
            due_date: dates::default_due_date(),
            time: String::new(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Local calendar day the task is due
    pub fn due_day(&self) -> NaiveDate {
        dates::local_day(self.due_date)
    }

    /// Due on exactly this calendar day
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.due_day() == day
    }

    /// Due day strictly before `today`
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.due_day() < today
    }

    /// Past due and not completed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.is_past(today)
    }

    /// Not completed and due within `[today, today + 7 days]`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        !self.completed && dates::in_day_range(self.due_day(), today, today + Duration::days(7))
    }

    /// Due within the week containing `today`, completed or not
    pub fn is_due_this_week(&self, today: NaiveDate) -> bool {
        let (start, end) = dates::week_bounds(today);
        dates::in_day_range(self.due_day(), start, end)
    }

    /// Shallow-merge a patch: provided fields overwrite, the rest are kept.
    /// `id` and `created_at` are never patched.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Fields accepted when creating a task; `title` and `category` are required
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub priority: Option<TaskPriority>,

    #[serde(default, rename = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub time: Option<String>,
}

/// Partial update for an existing task
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub priority: Option<TaskPriority>,

    #[serde(default, rename = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub time: Option<String>,

    #[serde(default)]
    pub completed: Option<bool>,
}

/// Filter criteria for task queries; set predicates AND-combine
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Exact category name match
    pub category: Option<String>,

    /// Exact completion state match
    pub completed: Option<bool>,

    /// Exact priority match
    pub priority: Option<TaskPriority>,

    /// Due on exactly this local calendar day
    pub due_on: Option<NaiveDate>,

    /// Due within this inclusive day range
    pub due_between: Option<(NaiveDate, NaiveDate)>,
}

impl TaskFilter {
    /// Whether a task satisfies every set predicate
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(category) = &self.category {
            if task.category != *category {
                return false;
            }
        }
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(day) = self.due_on {
            if !task.is_due_on(day) {
                return false;
            }
        }
        if let Some((start, end)) = self.due_between {
            if !dates::in_day_range(task.due_day(), start, end) {
                return false;
            }
        }
        true
    }
}
