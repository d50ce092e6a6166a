//! Enumerations for TUI state management.

/// Which view of the board application is on screen.
#[derive(Clone, Copy, PartialEq)]
pub enum View {
    Board,
    TaskDetail,
    AddTask,
    AddComment,
}

/// What the board application should do after its event loop ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardExit {
    Quit,
    OpenMenu,
}

/// Outcome of the project menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuExit {
    Quit,
    OpenProject(String),
}
