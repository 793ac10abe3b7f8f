//! Category entity and related types.

use serde::{Deserialize, Serialize};

/// Neutral gray used when no color is given
pub const DEFAULT_CATEGORY_COLOR: &str = "#6B7280";

/// A named, colored grouping label applied to tasks.
///
/// Tasks join to categories by `name`, not `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, immutable
    pub id: String,

    /// Display name and join key from tasks
    pub name: String,

    /// Display color (CSS hex value)
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: default_color(),
        }
    }

    pub fn with_color(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Fields accepted when creating a category; `name` is required
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCategory {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub color: Option<String>,
}

/// Update for an existing category; `name` is required, `color` is kept
/// when not provided
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub color: Option<String>,
}
