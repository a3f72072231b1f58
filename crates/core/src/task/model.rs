//! Task model definitions
//!
//! The JSON shape matches what the browser build stored under `tasks`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Task priority level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

/// A user task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Category *name*; not checked against the category collection
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task with a fresh id and the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            category: None,
            priority: TaskPriority::default(),
            is_completed: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(Some(description.into()));
        self
    }

    /// Set the category name
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(Some(category.into()));
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Mark completed or active
    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// True when the task has no category (absent or blank)
    pub fn is_uncategorized(&self) -> bool {
        self.category.as_deref().map_or(true, str::is_empty)
    }
}

/// Fields supplied when creating a task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: TaskPriority,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Trim text fields and reject a blank title
    pub fn normalized(self) -> Result<Self> {
        let title = normalize_title(&self.title)?;
        Ok(Self {
            title,
            description: non_empty(self.description.map(|d| d.trim().to_string())),
            category: non_empty(self.category),
            priority: self.priority,
        })
    }

    /// Build the stored task, stamped with `id` and `created_at`
    pub(crate) fn into_task(self, id: String, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: non_empty(self.description),
            category: non_empty(self.category),
            priority: self.priority,
            is_completed: false,
            created_at,
            updated_at: None,
        }
    }
}

/// A partial task edit; `None` leaves the field untouched.
///
/// `description` and `category` are double options so a field can be
/// cleared with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    pub is_completed: Option<bool>,
}

impl TaskUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.is_completed.is_none()
    }

    /// Trim text fields and reject a blank title
    pub fn normalized(self) -> Result<Self> {
        let title = match self.title {
            Some(title) => Some(normalize_title(&title)?),
            None => None,
        };
        Ok(Self {
            title,
            description: self
                .description
                .map(|d| d.map(|d| d.trim().to_string())),
            ..self
        })
    }

    /// Merge the set fields into `task` and stamp `updated_at`
    pub fn apply_to(&self, task: &mut Task, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = non_empty(description.clone());
        }
        if let Some(category) = &self.category {
            task.category = non_empty(category.clone());
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(is_completed) = self.is_completed {
            task.is_completed = is_completed;
        }
        task.updated_at = Some(now.max(task.created_at));
    }
}

impl From<NewTask> for TaskUpdate {
    /// An edit-form submission: every form field, but not completion
    fn from(draft: NewTask) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            category: Some(draft.category),
            priority: Some(draft.priority),
            is_completed: None,
        }
    }
}

fn normalize_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::InvalidInput("Task title cannot be empty".to_string()));
    }
    Ok(title.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty(Option::<String>::deserialize(deserializer)?))
}
