//! Project container and key helpers.
//!
//! A project owns an ordered collection of tasks and is identified by an
//! opaque id plus a short uppercase key (e.g. `TMP`). Keys are unique
//! case-insensitively across the whole collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::Status;
use crate::task::Task;

/// Top-level container of tasks, identified by a unique short key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub key: String,
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Get a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by id.
    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Tasks in this project's column for the given status, in board order.
    pub fn tasks_with_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }
}

/// Normalise a user-entered project key: trimmed and uppercased.
pub fn normalise_key(key: &str) -> String {
    key.trim().to_uppercase()
}

/// Derive a default project key from a name: the uppercased initial of each
/// whitespace-separated word, capped at 10 characters.
pub fn suggest_key(name: &str) -> String {
    name.trim()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(10)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_key() {
        assert_eq!(suggest_key("Task Management Platform"), "TMP");
        assert_eq!(suggest_key("my awesome project"), "MAP");
        assert_eq!(suggest_key("  Mobile   Banking App  "), "MBA");
        assert_eq!(suggest_key("solo"), "S");
        assert_eq!(suggest_key(""), "");
        // Caps at ten initials.
        assert_eq!(suggest_key("a b c d e f g h i j k l"), "ABCDEFGHIJ");
    }

    #[test]
    fn test_normalise_key() {
        assert_eq!(normalise_key("  dem  "), "DEM");
        assert_eq!(normalise_key("Proj"), "PROJ");
    }
}
