//! Project menu for selection and creation.
//!
//! This module provides a terminal-based menu for picking the active
//! project, creating a new one, and viewing application information.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::board::Board;
use crate::project::suggest_key;
use crate::store::ProjectStore;
use crate::tui::enums::MenuExit;
use crate::tui::input::InputField;
use crate::tui::utils::centered_rect;

/// Menu application state.
pub struct MenuApp<'a, S: ProjectStore> {
    board: &'a mut Board<S>,
    state: MenuState,
    list_state: ListState,
    menu_items: Vec<String>,
    name_input: InputField,
    key_input: InputField,
    desc_input: InputField,
    form_field: usize,
    status_message: String,
    exit: Option<MenuExit>,
}

#[derive(Debug, Clone)]
enum MenuState {
    MainMenu,
    ProjectList,
    NewProject,
    About,
}

impl<'a, S: ProjectStore> MenuApp<'a, S> {
    /// Create a new menu over the board state.
    pub fn new(board: &'a mut Board<S>) -> Self {
        let menu_items = vec![
            "Open Project".to_string(),
            "New Project".to_string(),
            "About".to_string(),
            "Exit".to_string(),
        ];

        let mut app = MenuApp {
            board,
            state: MenuState::MainMenu,
            list_state: ListState::default(),
            menu_items,
            name_input: InputField::new(),
            key_input: InputField::new(),
            desc_input: InputField::new(),
            form_field: 0,
            status_message: String::new(),
            exit: None,
        };

        app.list_state.select(Some(0));
        app
    }

    /// What the menu resolved to.
    pub fn exit_action(&self) -> MenuExit {
        self.exit.clone().unwrap_or(MenuExit::Quit)
    }

    /// Handle keyboard input based on current state.
    fn handle_input(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.status_message.clear();

                match self.state {
                    MenuState::MainMenu => self.handle_main_menu_input(key.code),
                    MenuState::ProjectList => self.handle_project_list_input(key.code),
                    MenuState::NewProject => self.handle_new_project_input(key.code),
                    MenuState::About => self.handle_about_input(key.code),
                }
            }
        }
        Ok(())
    }

    /// Handle input for the main menu state.
    fn handle_main_menu_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.select_prev(self.menu_items.len()),
            KeyCode::Down => self.select_next(self.menu_items.len()),
            KeyCode::Enter => {
                match self.list_state.selected() {
                    Some(0) => {
                        // Open Project
                        if self.board.projects().is_empty() {
                            self.status_message =
                                "No projects found. Create a new project first.".to_string();
                        } else {
                            self.state = MenuState::ProjectList;
                            self.list_state.select(Some(0));
                        }
                    }
                    Some(1) => {
                        // New Project
                        self.state = MenuState::NewProject;
                        self.form_field = 0;
                        self.name_input.clear();
                        self.key_input.clear();
                        self.desc_input.clear();
                    }
                    Some(2) => self.state = MenuState::About,
                    Some(3) => self.exit = Some(MenuExit::Quit),
                    _ => {}
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.exit = Some(MenuExit::Quit);
            }
            _ => {}
        }
    }

    /// Handle input for the project list state.
    fn handle_project_list_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.select_prev(self.board.projects().len()),
            KeyCode::Down => self.select_next(self.board.projects().len()),
            KeyCode::Enter => {
                if let Some(selected) = self.list_state.selected() {
                    if let Some(project) = self.board.projects().get(selected) {
                        self.exit = Some(MenuExit::OpenProject(project.id.clone()));
                    }
                }
            }
            KeyCode::Esc => {
                self.state = MenuState::MainMenu;
                self.list_state.select(Some(0));
            }
            _ => {}
        }
    }

    /// Handle input for the new project form.
    fn handle_new_project_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.name_input.clear();
                self.key_input.clear();
                self.desc_input.clear();
                self.state = MenuState::MainMenu;
                self.list_state.select(Some(0));
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form_field = (self.form_field + 1) % 3;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form_field = if self.form_field == 0 { 2 } else { self.form_field - 1 };
            }
            KeyCode::Enter => {
                // Empty key falls back to the name's initials.
                let key = match self.key_input.trimmed() {
                    Some(k) => k.to_string(),
                    None => suggest_key(&self.name_input.value),
                };
                match self.board.create_project(
                    &self.name_input.value,
                    &key,
                    &self.desc_input.value,
                ) {
                    Ok(id) => {
                        self.name_input.clear();
                        self.key_input.clear();
                        self.desc_input.clear();
                        self.exit = Some(MenuExit::OpenProject(id));
                    }
                    Err(e) => {
                        self.status_message = format!("Error: {e}");
                    }
                }
            }
            KeyCode::Backspace => self.active_field().handle_backspace(),
            KeyCode::Left => self.active_field().move_cursor_left(),
            KeyCode::Right => self.active_field().move_cursor_right(),
            KeyCode::Char(c) => self.active_field().handle_char(c),
            _ => {}
        }
    }

    /// Handle input for the about screen.
    fn handle_about_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.state = MenuState::MainMenu;
                self.list_state.select(Some(0));
            }
            _ => {}
        }
    }

    fn active_field(&mut self) -> &mut InputField {
        match self.form_field {
            0 => &mut self.name_input,
            1 => &mut self.key_input,
            _ => &mut self.desc_input,
        }
    }

    fn select_prev(&mut self, _len: usize) {
        if let Some(selected) = self.list_state.selected() {
            if selected > 0 {
                self.list_state.select(Some(selected - 1));
            }
        }
    }

    fn select_next(&mut self, len: usize) {
        if let Some(selected) = self.list_state.selected() {
            if len > 0 && selected < len - 1 {
                self.list_state.select(Some(selected + 1));
            }
        }
    }

    /// Main render function that dispatches to state-specific renderers.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.state {
            MenuState::MainMenu => self.render_main_menu(f, chunks[0]),
            MenuState::ProjectList => self.render_project_list(f, chunks[0]),
            MenuState::NewProject => self.render_new_project(f, chunks[0]),
            MenuState::About => self.render_about(f, chunks[0]),
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Render the main menu.
    fn render_main_menu(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Menu items
            ])
            .split(area);

        let header_text = vec![Line::from(vec![Span::styled(
            "PROJECTFLOW",
            Style::default().add_modifier(Modifier::BOLD),
        )])];

        let header = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));

        f.render_widget(header, chunks[0]);

        let menu_items: Vec<ListItem> = self
            .menu_items
            .iter()
            .map(|item| ListItem::new(Line::from(format!("  {}", item))))
            .collect();

        let menu = List::new(menu_items)
            .block(Block::default().borders(Borders::ALL).title("Project Menu"))
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol("► ");

        f.render_stateful_widget(menu, chunks[1], &mut self.list_state);
    }

    /// Render the project selection list.
    fn render_project_list(&mut self, f: &mut Frame, area: Rect) {
        let project_items: Vec<ListItem> = self
            .board
            .projects()
            .iter()
            .map(|project| {
                ListItem::new(Line::from(format!(
                    "  [{}] {} — {} tasks",
                    project.key,
                    project.name,
                    project.tasks.len()
                )))
            })
            .collect();

        let projects_list = List::new(project_items)
            .block(Block::default().borders(Borders::ALL).title("Select Project"))
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol("► ");

        f.render_stateful_widget(projects_list, area, &mut self.list_state);
    }

    /// Render the new project form.
    fn render_new_project(&mut self, f: &mut Frame, area: Rect) {
        let area = centered_rect(60, 60, area);
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name
                Constraint::Length(3), // Key
                Constraint::Length(3), // Description
                Constraint::Min(0),    // Help
            ])
            .split(area);

        let suggested = suggest_key(&self.name_input.value);
        let key_title = if self.key_input.value.is_empty() && !suggested.is_empty() {
            format!("Project Key (suggested: {suggested})")
        } else {
            "Project Key".to_string()
        };

        let fields = [
            (0, "Project Name", self.name_input.value.as_str()),
            (1, key_title.as_str(), self.key_input.value.as_str()),
            (2, "Description", self.desc_input.value.as_str()),
        ];
        for (i, title, value) in fields {
            let style = if self.form_field == i {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let input = Paragraph::new(value).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title.to_string())
                    .border_style(style),
            );
            f.render_widget(input, chunks[i]);
        }

        let help = Paragraph::new("Tab: Next field | Enter: Create | Esc: Cancel")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(help, chunks[3]);

        // Cursor in the active field.
        let active = match self.form_field {
            0 => &self.name_input,
            1 => &self.key_input,
            _ => &self.desc_input,
        };
        f.set_cursor_position((
            chunks[self.form_field].x + active.cursor as u16 + 1,
            chunks[self.form_field].y + 1,
        ));
    }

    /// Render the about screen.
    fn render_about(&mut self, f: &mut Frame, area: Rect) {
        let about_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "ProjectFlow",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("A kanban-style tracker for projects and tasks,"),
            Line::from("with an interactive board and a scripting CLI."),
            Line::from(""),
            Line::from(concat!("Version: ", env!("CARGO_PKG_VERSION"))),
            Line::from(""),
            Line::from("Press any key to return to main menu"),
        ];

        let about = Paragraph::new(about_text)
            .block(Block::default().borders(Borders::ALL).title("About"))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(about, area);
    }

    /// Render the status bar with context-appropriate help text.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                MenuState::MainMenu => "Use ↑↓ to navigate, Enter to select, q/Esc to quit".to_string(),
                MenuState::ProjectList => "Use ↑↓ to navigate, Enter to open, Esc to go back".to_string(),
                MenuState::NewProject => "Tab to change field, Enter to create, Esc to cancel".to_string(),
                MenuState::About => "Press any key to return".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main event loop for the menu.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            self.handle_input()?;

            if self.exit.is_some() {
                break;
            }
        }
        Ok(())
    }
}
