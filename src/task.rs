//! Task and comment data structures.
//!
//! This module defines the core `Task` struct that represents a single unit
//! of work on a board, along with its append-only `Comment` trail.
//!
//! Serialized field names are camelCase and timestamps are ISO-8601 strings,
//! matching the on-disk layout of previously stored data.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{Priority, Status};

/// An append-only note attached to a task. No edit or delete exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A unit of work owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub reporter: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Hinted range 1-21; not enforced beyond UI hinting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

impl Task {
    /// Refresh `updated_at`. Must be called on every mutation to the task.
    ///
    /// `updated_at` always moves strictly forward, even when the wall clock
    /// has not advanced between two events.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }
}

/// User-supplied fields for a new task; id, timestamps and the todo status
/// are filled in by the board on creation.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assignee: Option<String>,
    pub reporter: String,
    pub story_points: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: "1".to_string(),
            title: "Write docs".to_string(),
            description: "Document the public API".to_string(),
            status: Status::Todo,
            priority: Priority::Medium,
            assignee: None,
            reporter: "Test User".to_string(),
            comments: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            story_points: Some(3),
            outcome: None,
        }
    }

    #[test]
    fn test_touch_moves_strictly_forward() {
        let mut task = sample_task();
        let before = task.updated_at;
        task.touch();
        assert!(task.updated_at > before);
        // Repeated touches in the same instant still advance.
        let mid = task.updated_at;
        task.touch();
        assert!(task.updated_at > mid);
    }

    #[test]
    fn test_missing_comments_field_tolerated() {
        let json = r#"{
            "id": "7",
            "title": "T",
            "description": "D",
            "status": "todo",
            "priority": "low",
            "reporter": "R",
            "createdAt": "2024-01-10T00:00:00Z",
            "updatedAt": "2024-01-10T00:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.comments.is_empty());
        assert!(task.assignee.is_none());
        assert!(task.story_points.is_none());
    }
}
