//! Notification model definitions

use serde::{Deserialize, Serialize};

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Success,
    Error,
}

/// A transient status message shown after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub status: NotificationStatus,
}

impl Notification {
    pub fn new(message: impl Into<String>, status: NotificationStatus) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationStatus::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationStatus::Error)
    }

    pub fn is_error(&self) -> bool {
        self.status == NotificationStatus::Error
    }
}

/// Message texts raised by repository operations
pub mod messages {
    pub const TASK_ADDED: &str = "Task added successfully!";
    pub const TASK_UPDATED: &str = "Task updated successfully!";
    pub const TASK_COMPLETED: &str = "Task marked as completed!";
    pub const TASK_ACTIVE: &str = "Task marked as active!";
    pub const TASK_DELETED: &str = "Task deleted successfully!";
    pub const TASK_TITLE_EMPTY: &str = "Task title cannot be empty!";
    pub const CATEGORY_ADDED: &str = "Category added successfully!";
    pub const CATEGORY_EXISTS: &str = "Category already exists!";
    pub const CATEGORY_NAME_EMPTY: &str = "Category name cannot be empty!";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let value = serde_json::to_value(Notification::error("Boom")).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "Boom");
    }
}
