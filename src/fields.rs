//! Enumerations and display metadata for board columns and priorities.
//!
//! This module defines the status and priority codes tasks carry, together
//! with the label/icon metadata each code is rendered with across the CLI
//! and the board UI.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Board column a task currently sits in.
///
/// The set is flat: any status may move to any other status at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Progress,
    Review,
    Done,
}

impl Status {
    /// All statuses in board-column order.
    pub const ALL: [Status; 4] = [Status::Todo, Status::Progress, Status::Review, Status::Done];
}

/// Priority classification; a display and sorting hint only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];
}

/// Format a status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Todo => "To Do",
        Status::Progress => "In Progress",
        Status::Review => "Review",
        Status::Done => "Done",
    }
}

/// Icon shown next to a status in column headers.
pub fn status_icon(s: Status) -> &'static str {
    match s {
        Status::Todo => "📋",
        Status::Progress => "⚡",
        Status::Review => "👀",
        Status::Done => "✅",
    }
}

/// Format a priority for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
        Priority::Urgent => "Urgent",
    }
}

/// Icon shown next to a priority on task cards.
pub fn priority_icon(p: Priority) -> &'static str {
    match p {
        Priority::Low => "⬇",
        Priority::Medium => "➡",
        Priority::High => "⬆",
        Priority::Urgent => "🔥",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Todo).unwrap(), "\"todo\"");
        assert_eq!(serde_json::to_string(&Status::Progress).unwrap(), "\"progress\"");
        assert_eq!(serde_json::to_string(&Status::Review).unwrap(), "\"review\"");
        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"done\"");
    }

    #[test]
    fn test_priority_round_trip() {
        for p in Priority::ALL {
            let json = serde_json::to_string(&p).unwrap();
            let back: Priority = serde_json::from_str(&json).unwrap();
            assert_eq!(back, p);
        }
    }
}
