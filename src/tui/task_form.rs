//! Add-task form state for the terminal user interface.
//!
//! Holds the transient field buffers for creating a task and the
//! field-navigation logic. Submission is delegated to the board controller;
//! the form itself never validates beyond prompting.

use crate::fields::Priority;
use crate::task::TaskDraft;
use crate::tui::input::InputField;

/// Order of the form fields, top to bottom.
pub const TITLE_FIELD: usize = 0;
pub const DESCRIPTION_FIELD: usize = 1;
pub const PRIORITY_FIELD: usize = 2;
pub const ASSIGNEE_FIELD: usize = 3;
pub const POINTS_FIELD: usize = 4;

const FIELD_COUNT: usize = 5;

/// Form state for creating a task.
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub assignee: InputField,
    pub points: InputField,
    pub priority: usize,
    pub priorities: Vec<Priority>,
    pub current_field: usize,
}

impl TaskForm {
    pub fn new() -> Self {
        let mut form = Self {
            title: InputField::new(),
            description: InputField::new(),
            assignee: InputField::new(),
            points: InputField::new(),
            priority: 1, // Medium
            priorities: Priority::ALL.to_vec(),
            current_field: 0,
        };
        form.update_active_field();
        form
    }

    /// Move to the next field in the form.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Move to the previous field in the form.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            FIELD_COUNT - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    fn update_active_field(&mut self) {
        self.title.active = self.current_field == TITLE_FIELD;
        self.description.active = self.current_field == DESCRIPTION_FIELD;
        self.assignee.active = self.current_field == ASSIGNEE_FIELD;
        self.points.active = self.current_field == POINTS_FIELD;
    }

    /// Handle character input for the currently active field.
    pub fn handle_char(&mut self, c: char) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_char(c),
            DESCRIPTION_FIELD => self.description.handle_char(c),
            ASSIGNEE_FIELD => self.assignee.handle_char(c),
            // Story points are numeric; anything else is dropped.
            POINTS_FIELD if c.is_ascii_digit() => self.points.handle_char(c),
            _ => {}
        }
    }

    /// Handle backspace for the currently active field.
    pub fn handle_backspace(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_backspace(),
            DESCRIPTION_FIELD => self.description.handle_backspace(),
            ASSIGNEE_FIELD => self.assignee.handle_backspace(),
            POINTS_FIELD => self.points.handle_backspace(),
            _ => {}
        }
    }

    /// Handle left/right arrows: cursor movement, or cycling the priority
    /// selector when it is active.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            TITLE_FIELD => cursor(&mut self.title, right),
            DESCRIPTION_FIELD => cursor(&mut self.description, right),
            ASSIGNEE_FIELD => cursor(&mut self.assignee, right),
            POINTS_FIELD => cursor(&mut self.points, right),
            PRIORITY_FIELD => {
                self.priority = if right {
                    (self.priority + 1) % self.priorities.len()
                } else if self.priority == 0 {
                    self.priorities.len() - 1
                } else {
                    self.priority - 1
                };
            }
            _ => {}
        }
    }

    /// The selected priority.
    pub fn selected_priority(&self) -> Priority {
        self.priorities[self.priority]
    }

    /// Assemble a draft from the current buffers. Trimming and required-field
    /// validation happen in the board controller.
    pub fn to_draft(&self, reporter: &str) -> TaskDraft {
        TaskDraft {
            title: self.title.value.clone(),
            description: self.description.value.clone(),
            priority: self.selected_priority(),
            assignee: self.assignee.trimmed().map(|s| s.to_string()),
            reporter: reporter.to_string(),
            story_points: self.points.value.trim().parse().ok(),
        }
    }
}

/// Move a field's cursor one character left or right.
fn cursor(field: &mut InputField, right: bool) {
    if right {
        field.move_cursor_right();
    } else {
        field.move_cursor_left();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = TaskForm::new();
        assert!(form.title.active);
        for _ in 0..FIELD_COUNT {
            form.next_field();
        }
        assert_eq!(form.current_field, TITLE_FIELD);
        form.prev_field();
        assert_eq!(form.current_field, POINTS_FIELD);
    }

    #[test]
    fn test_points_only_accepts_digits() {
        let mut form = TaskForm::new();
        form.current_field = POINTS_FIELD;
        form.update_active_field();
        for c in "a1b3".chars() {
            form.handle_char(c);
        }
        assert_eq!(form.points.value, "13");
        assert_eq!(form.to_draft("R").story_points, Some(13));
    }

    #[test]
    fn test_draft_carries_selected_priority() {
        let mut form = TaskForm::new();
        form.current_field = PRIORITY_FIELD;
        form.handle_left_right(true);
        assert_eq!(form.to_draft("R").priority, Priority::High);
        assert_eq!(form.to_draft("R").reporter, "R");
    }
}
