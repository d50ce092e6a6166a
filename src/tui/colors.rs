//! Color constants for the terminal user interface.

use ratatui::style::Color;

use crate::fields::{Priority, Status};

/// Used for the To Do column
pub const SLATE: Color = Color::Rgb(100, 116, 139);
/// Used for the In Progress column
pub const AMBER: Color = Color::Rgb(217, 119, 6);
/// Used for the Review column
pub const VIOLET: Color = Color::Rgb(124, 58, 237);
/// Used for the Done column
pub const EMERALD: Color = Color::Rgb(5, 150, 105);

/// Theme color for a status column.
pub fn status_color(s: Status) -> Color {
    match s {
        Status::Todo => SLATE,
        Status::Progress => AMBER,
        Status::Review => VIOLET,
        Status::Done => EMERALD,
    }
}

/// Accent color for a priority badge.
pub fn priority_color(p: Priority) -> Color {
    match p {
        Priority::Low => Color::Green,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::LightRed,
        Priority::Urgent => Color::Red,
    }
}
