//! Kanban board interface.
//!
//! This module implements the board view where tasks are organized into
//! columns by status, allowing visual task management and rapid status
//! updates by moving cards between columns.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::board::Board;
use crate::fields::{format_priority, format_status, priority_icon, status_icon, Status};
use crate::store::ProjectStore;
use crate::task::Task;
use crate::tui::colors::{priority_color, status_color};
use crate::tui::enums::{BoardExit, View};
use crate::tui::input::InputField;
use crate::tui::task_form::{self, TaskForm};
use crate::tui::utils::{centered_rect, initials};

const COLUMN_COUNT: usize = Status::ALL.len();

/// Main board application state.
pub struct BoardApp<'a, S: ProjectStore> {
    board: &'a mut Board<S>,
    view: View,
    selected_column: usize,
    selected_card: usize,
    column_scroll_offsets: [usize; COLUMN_COUNT],
    status_message: String,
    filter_active: bool,
    filter_text: String,
    task_form: TaskForm,
    comment_input: InputField,
    exit: Option<BoardExit>,

    // Task ids organized into the four status columns.
    columns: [Vec<String>; COLUMN_COUNT],
}

impl<'a, S: ProjectStore> BoardApp<'a, S> {
    /// Create a new board app over the current project.
    pub fn new(board: &'a mut Board<S>) -> Self {
        let mut app = BoardApp {
            board,
            view: View::Board,
            selected_column: 0,
            selected_card: 0,
            column_scroll_offsets: [0; COLUMN_COUNT],
            status_message: String::new(),
            filter_active: false,
            filter_text: String::new(),
            task_form: TaskForm::new(),
            comment_input: InputField::new(),
            exit: None,
            columns: Default::default(),
        };

        app.update_columns();
        app
    }

    /// What should happen after the event loop ends.
    pub fn exit_action(&self) -> BoardExit {
        self.exit.unwrap_or(BoardExit::Quit)
    }

    /// Rebuild the status columns from the current project and filter.
    fn update_columns(&mut self) {
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.clear();
            self.column_scroll_offsets[i] = 0;
        }

        let Some(project) = self.board.current_project() else {
            return;
        };

        let filter = self.filter_text.to_lowercase();
        for (i, &status) in Status::ALL.iter().enumerate() {
            self.columns[i] = project
                .tasks_with_status(status)
                .into_iter()
                .filter(|t| matches_filter(t, &filter))
                .map(|t| t.id.clone())
                .collect();
        }

        self.clamp_selection();
    }

    /// Ensure selected column and card indices are valid.
    fn clamp_selection(&mut self) {
        if self.selected_column >= COLUMN_COUNT {
            self.selected_column = 0;
        }

        let column_len = self.columns[self.selected_column].len();
        if column_len == 0 {
            self.selected_card = 0;
            self.column_scroll_offsets[self.selected_column] = 0;
        } else if self.selected_card >= column_len {
            self.selected_card = column_len - 1;
        }
    }

    /// Id of the currently selected card, if the column has one.
    fn selected_task_id(&self) -> Option<String> {
        self.columns[self.selected_column].get(self.selected_card).cloned()
    }

    fn selected_task(&self) -> Option<&Task> {
        let id = self.columns[self.selected_column].get(self.selected_card)?;
        self.board.current_project()?.task(id)
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Handle keyboard input.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if self.filter_active {
                    self.handle_filter_input(key.code);
                    return Ok(false);
                }

                match self.view {
                    View::Board => return Ok(self.handle_board_input(key.code, key.modifiers)),
                    View::TaskDetail => self.handle_detail_input(key.code),
                    View::AddTask => self.handle_add_task_input(key.code),
                    View::AddComment => self.handle_add_comment_input(key.code),
                }
            }
        }
        Ok(false)
    }

    /// Incremental filter entry over title/assignee.
    fn handle_filter_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.filter_active = false;
                self.filter_text.clear();
                self.update_columns();
                self.clear_status_message();
            }
            KeyCode::Enter => {
                self.filter_active = false;
                if self.filter_text.is_empty() {
                    self.set_status_message("Filter cleared".to_string());
                } else {
                    let total: usize = self.columns.iter().map(|col| col.len()).sum();
                    self.set_status_message(format!(
                        "Filter: '{}' ({} tasks shown)",
                        self.filter_text, total
                    ));
                }
            }
            KeyCode::Backspace => {
                if !self.filter_text.is_empty() {
                    self.filter_text.pop();
                    self.update_columns();
                }
            }
            KeyCode::Char(c) => {
                self.filter_text.push(c);
                self.update_columns();
            }
            _ => {}
        }
    }

    /// Board-view keys. Returns true when the event loop should stop.
    fn handle_board_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.clear_status_message();

        match key {
            KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Esc => return true,

            // Card movement between columns (check first, before column nav)
            KeyCode::Left if modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_card(false);
            }
            KeyCode::Right if modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_card(true);
            }

            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                    self.clamp_selection();
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLUMN_COUNT - 1 {
                    self.selected_column += 1;
                    self.clamp_selection();
                }
            }
            KeyCode::Up => {
                if self.selected_card > 0 {
                    self.selected_card -= 1;
                }
            }
            KeyCode::Down => {
                let column_len = self.columns[self.selected_column].len();
                if column_len > 0 && self.selected_card < column_len - 1 {
                    self.selected_card += 1;
                }
            }

            KeyCode::Enter => {
                if self.selected_task().is_some() {
                    self.view = View::TaskDetail;
                }
            }

            KeyCode::Char('a') => {
                if self.board.current_project().is_some() {
                    self.task_form = TaskForm::new();
                    self.view = View::AddTask;
                } else {
                    self.set_status_message("No project selected".to_string());
                }
            }

            KeyCode::Char('/') => {
                self.filter_active = true;
                self.set_status_message(
                    "Filter: Type to search title/assignee, Enter to apply, Esc to cancel".to_string(),
                );
            }

            KeyCode::Char('m') => {
                self.exit = Some(BoardExit::OpenMenu);
                return true;
            }

            KeyCode::Char('h') => {
                self.set_status_message(
                    "Help: Enter: Details | a: Add task | Ctrl+←/→: Move card | /: Filter | m: Menu | Esc: Exit".to_string(),
                );
            }

            _ => {}
        }
        false
    }

    /// Detail-popup keys: cycle status, open comment entry, close.
    fn handle_detail_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                self.view = View::Board;
                self.clear_status_message();
            }
            KeyCode::Left => self.cycle_status(false),
            KeyCode::Right => self.cycle_status(true),
            KeyCode::Char('c') => {
                self.comment_input.clear();
                self.view = View::AddComment;
            }
            _ => {}
        }
    }

    /// Comment-entry keys.
    fn handle_add_comment_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.comment_input.clear();
                self.view = View::TaskDetail;
            }
            KeyCode::Enter => {
                if let Some(task_id) = self.selected_task_id() {
                    if self.comment_input.trimmed().is_some() {
                        self.board.add_comment(&task_id, &self.comment_input.value);
                        self.set_status_message("Comment added".to_string());
                    }
                }
                self.comment_input.clear();
                self.view = View::TaskDetail;
            }
            KeyCode::Backspace => self.comment_input.handle_backspace(),
            KeyCode::Left => self.comment_input.move_cursor_left(),
            KeyCode::Right => self.comment_input.move_cursor_right(),
            KeyCode::Char(c) => self.comment_input.handle_char(c),
            _ => {}
        }
    }

    /// Add-task form keys.
    fn handle_add_task_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.task_form = TaskForm::new();
                self.view = View::Board;
            }
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Left => self.task_form.handle_left_right(false),
            KeyCode::Right => self.task_form.handle_left_right(true),
            KeyCode::Backspace => self.task_form.handle_backspace(),
            KeyCode::Enter => {
                let Some(project_id) = self.board.current_project().map(|p| p.id.clone()) else {
                    self.view = View::Board;
                    return;
                };
                let draft = self.task_form.to_draft(self.board.user());
                match self.board.add_task(&project_id, draft) {
                    Ok(()) => {
                        self.task_form = TaskForm::new();
                        self.view = View::Board;
                        self.update_columns();
                        self.set_status_message("Task created".to_string());
                    }
                    Err(e) => {
                        self.set_status_message(format!("Error: {e}"));
                    }
                }
            }
            KeyCode::Char(c) => self.task_form.handle_char(c),
            _ => {}
        }
    }

    /// Move the selected card to the adjacent column, changing its status.
    fn move_card(&mut self, right: bool) {
        let target_column = if right {
            if self.selected_column >= COLUMN_COUNT - 1 {
                return;
            }
            self.selected_column + 1
        } else {
            if self.selected_column == 0 {
                return;
            }
            self.selected_column - 1
        };

        let Some(task_id) = self.selected_task_id() else {
            return;
        };

        let new_status = Status::ALL[target_column];
        self.board.change_task_status(&task_id, new_status);
        self.update_columns();

        self.set_status_message(format!("Task moved to {}", format_status(new_status)));
        self.selected_column = target_column;

        // Follow the card into its new column.
        if let Some(new_position) = self.columns[target_column].iter().position(|id| *id == task_id) {
            self.selected_card = new_position;
        } else {
            self.clamp_selection();
        }
    }

    /// Cycle the selected task's status from the detail popup.
    fn cycle_status(&mut self, forward: bool) {
        let Some(task_id) = self.selected_task_id() else {
            return;
        };
        let Some(task) = self.board.current_project().and_then(|p| p.task(&task_id)) else {
            return;
        };
        let current = Status::ALL.iter().position(|&s| s == task.status).unwrap_or(0);
        let next = if forward {
            (current + 1) % COLUMN_COUNT
        } else {
            (current + COLUMN_COUNT - 1) % COLUMN_COUNT
        };
        let new_status = Status::ALL[next];
        self.board.change_task_status(&task_id, new_status);
        self.update_columns();

        // Keep the card selected in its new column.
        self.selected_column = next;
        if let Some(pos) = self.columns[next].iter().position(|id| *id == task_id) {
            self.selected_card = pos;
        } else {
            self.clamp_selection();
        }
        self.set_status_message(format!("Task moved to {}", format_status(new_status)));
    }

    /// Render the board.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_board(f, chunks[1]);
        self.render_status_bar(f, chunks[2]);

        match self.view {
            View::Board => {}
            View::TaskDetail => self.render_task_detail_popup(f),
            View::AddComment => {
                self.render_task_detail_popup(f);
                self.render_comment_popup(f);
            }
            View::AddTask => self.render_add_task_popup(f),
        }
    }

    /// Render the header.
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let context_display = match self.board.current_project() {
            Some(project) => format!(
                "Project: {} [{}] — {} tasks total",
                project.name,
                project.key,
                project.tasks.len()
            ),
            None => "No project selected".to_string(),
        };

        let header_text = vec![Line::from(vec![
            Span::styled("PROJECTFLOW", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                context_display,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])];

        let header_block = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header_block, area);
    }

    /// Render the four status columns.
    fn render_board(&mut self, f: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = (0..COLUMN_COUNT)
            .map(|_| Constraint::Percentage(100 / COLUMN_COUNT as u16))
            .collect();

        let columns_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, &column_area) in columns_layout.iter().enumerate() {
            self.render_column(f, column_area, i);
        }
    }

    /// Render a single column.
    fn render_column(&mut self, f: &mut Frame, area: Rect, column_index: usize) {
        let status = Status::ALL[column_index];
        let is_selected = column_index == self.selected_column;
        let color = status_color(status);

        let title = format!(
            " {} {} ({}) ",
            status_icon(status),
            format_status(status),
            self.columns[column_index].len()
        );

        let border_style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);

        let inner = block.inner(area);
        f.render_widget(block, area);

        let cards = &self.columns[column_index];
        if cards.is_empty() {
            let empty = Paragraph::new("No tasks yet")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, Rect { y: inner.y + 1, height: 1.min(inner.height), ..inner });
            return;
        }

        let card_height = 5;
        let available_height = inner.height as usize;
        let visible_cards = available_height / card_height;

        // Scroll so the selected card stays visible.
        let scroll_offset = if is_selected {
            let start_visible = self.column_scroll_offsets[column_index];
            let end_visible = start_visible + visible_cards;

            if self.selected_card < start_visible {
                self.column_scroll_offsets[column_index] = self.selected_card;
                self.selected_card
            } else if self.selected_card >= end_visible && end_visible > 0 {
                let new_offset = self.selected_card - visible_cards + 1;
                self.column_scroll_offsets[column_index] = new_offset;
                new_offset
            } else {
                start_visible
            }
        } else {
            self.column_scroll_offsets[column_index]
        };

        let mut current_y = 0;
        let mut rendered_cards = 0;

        for (card_index, task_id) in cards.iter().enumerate().skip(scroll_offset) {
            let Some(task) = self.board.current_project().and_then(|p| p.task(task_id)) else {
                continue;
            };
            if current_y + card_height > available_height {
                break;
            }

            let is_this_card_selected = is_selected && card_index == self.selected_card;

            let card_area = Rect {
                x: inner.x,
                y: inner.y + current_y as u16,
                width: inner.width,
                height: card_height as u16,
            };

            render_card(f, card_area, task, color, is_this_card_selected);

            current_y += card_height;
            rendered_cards += 1;
        }

        if scroll_offset > 0 {
            let indicator = Paragraph::new(format!("▲ +{} above", scroll_offset))
                .style(Style::default().fg(Color::Cyan));
            f.render_widget(indicator, Rect { x: inner.x, y: inner.y, width: inner.width, height: 1 });
        }

        let remaining = cards.len().saturating_sub(scroll_offset + rendered_cards);
        if remaining > 0 && inner.height > 0 {
            let indicator = Paragraph::new(format!("▼ +{} below", remaining))
                .style(Style::default().fg(Color::Cyan));
            f.render_widget(indicator, Rect {
                x: inner.x,
                y: inner.y + inner.height - 1,
                width: inner.width,
                height: 1,
            });
        }
    }

    /// Render the status bar.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if self.filter_active {
            format!(
                "Filter: {} | Type to search, Enter to apply, Esc to cancel",
                self.filter_text
            )
        } else if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            let total: usize = self.columns.iter().map(|col| col.len()).sum();
            let filter_indicator = if !self.filter_text.is_empty() {
                format!(" [Filter: {}]", self.filter_text)
            } else {
                String::new()
            };
            format!(
                "Tasks: {}{} | a: Add | Enter: Details | Ctrl+←/→: Move | /: Filter | m: Menu | h: Help",
                total, filter_indicator
            )
        };

        let color = status_color(Status::ALL[self.selected_column]);
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(color).fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Render the task detail popup.
    fn render_task_detail_popup(&self, f: &mut Frame) {
        let Some(task) = self.selected_task() else {
            return;
        };

        let popup_area = centered_rect(80, 80, f.area());
        f.render_widget(Clear, popup_area);

        let mut detail_lines = vec![
            Line::from(vec![Span::styled(
                format!("#{}: {}", task.id, task.title),
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::raw(format!("Status:    ◄ {} ►", format_status(task.status))),
            ]),
            Line::from(vec![
                Span::raw("Priority:  "),
                Span::styled(
                    format!("{} {}", priority_icon(task.priority), format_priority(task.priority)),
                    Style::default().fg(priority_color(task.priority)),
                ),
            ]),
            Line::from(format!("Assignee:  {}", task.assignee.as_deref().unwrap_or("-"))),
            Line::from(format!(
                "Reporter:  {} ({})",
                task.reporter,
                initials(&task.reporter)
            )),
            Line::from(format!(
                "Points:    {}",
                task.story_points.map(|p| p.to_string()).unwrap_or_else(|| "-".into())
            )),
            Line::from(format!("Created:   {}", task.created_at.format("%Y-%m-%d"))),
            Line::from(format!("Updated:   {}", task.updated_at.format("%Y-%m-%d"))),
        ];

        if let Some(ref outcome) = task.outcome {
            detail_lines.push(Line::from(format!("Outcome:   {outcome}")));
        }

        detail_lines.push(Line::from(""));
        detail_lines.push(Line::from("Description:"));
        detail_lines.push(Line::from(task.description.clone()));
        detail_lines.push(Line::from(""));
        detail_lines.push(Line::from(vec![Span::styled(
            format!("Comments ({})", task.comments.len()),
            Style::default().add_modifier(Modifier::BOLD),
        )]));

        for comment in &task.comments {
            detail_lines.push(Line::from(format!(
                "  [{}] {}: {}",
                comment.created_at.format("%Y-%m-%d"),
                comment.author,
                comment.content
            )));
        }

        let color = status_color(task.status);
        let popup_block = Block::default()
            .borders(Borders::ALL)
            .title("Task Details (←/→: Status | c: Comment | Esc: Close)")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let popup_paragraph = Paragraph::new(detail_lines)
            .block(popup_block)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(Color::Black));

        f.render_widget(popup_paragraph, popup_area);
    }

    /// Render the comment entry popup above the detail view.
    fn render_comment_popup(&self, f: &mut Frame) {
        let area = centered_rect(60, 20, f.area());
        f.render_widget(Clear, area);

        let input = Paragraph::new(self.comment_input.value.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Add a comment (Enter: Submit | Esc: Cancel)")
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(input, area);

        f.set_cursor_position((area.x + self.comment_input.cursor as u16 + 1, area.y + 1));
    }

    /// Render the add-task form popup.
    fn render_add_task_popup(&self, f: &mut Frame) {
        let area = centered_rect(60, 70, f.area());
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Create New Task")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Description
                Constraint::Length(3), // Priority
                Constraint::Length(3), // Assignee
                Constraint::Length(3), // Story points
                Constraint::Min(0),    // Help
            ])
            .split(inner);

        let form = &self.task_form;
        let priority = form.selected_priority();
        let priority_text = format!(
            "◄ {} {} ►",
            priority_icon(priority),
            format_priority(priority)
        );

        let fields = [
            (task_form::TITLE_FIELD, "Title *", form.title.value.as_str()),
            (task_form::DESCRIPTION_FIELD, "Description *", form.description.value.as_str()),
            (task_form::PRIORITY_FIELD, "Priority", priority_text.as_str()),
            (task_form::ASSIGNEE_FIELD, "Assignee", form.assignee.value.as_str()),
            (task_form::POINTS_FIELD, "Story Points (1-21)", form.points.value.as_str()),
        ];

        for (i, title, value) in fields {
            let style = if form.current_field == i {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let field = Paragraph::new(value).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(style),
            );
            f.render_widget(field, chunks[i]);
        }

        let help = Paragraph::new("Tab: Next field | ←/→: Edit/cycle | Enter: Create | Esc: Cancel")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(help, chunks[5]);

        // Cursor in the active text field; the priority row is a selector.
        let cursor = match form.current_field {
            task_form::TITLE_FIELD => Some(form.title.cursor),
            task_form::DESCRIPTION_FIELD => Some(form.description.cursor),
            task_form::ASSIGNEE_FIELD => Some(form.assignee.cursor),
            task_form::POINTS_FIELD => Some(form.points.cursor),
            _ => None,
        };
        if let Some(cursor) = cursor {
            f.set_cursor_position((
                chunks[form.current_field].x + cursor as u16 + 1,
                chunks[form.current_field].y + 1,
            ));
        }
    }

    /// Main event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

/// Case-insensitive filter over title and assignee; an empty filter matches
/// everything.
fn matches_filter(task: &Task, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(filter)
        || task
            .assignee
            .as_ref()
            .is_some_and(|a| a.to_lowercase().contains(filter))
}

/// Render a single task card.
fn render_card(f: &mut Frame, area: Rect, task: &Task, accent: Color, is_selected: bool) {
    let style = if is_selected {
        Style::default().bg(accent).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray)
    };

    let mut card_text = vec![Line::from(format!(
        "#{} {} {}",
        task.id,
        priority_icon(task.priority),
        format_priority(task.priority)
    ))];

    // Word-wrap the title into at most two lines.
    let available_width = area.width.saturating_sub(2) as usize;
    let mut current_line = String::new();
    let mut lines = Vec::new();

    for word in task.title.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= available_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line.clone());
            current_line = word.to_string();
            if lines.len() >= 2 {
                break;
            }
        }
    }
    if !current_line.is_empty() && lines.len() < 2 {
        lines.push(current_line);
    }

    for line in lines {
        card_text.push(Line::from(line));
    }

    // Bottom line: assignee initials, comment count, story points.
    let mut footer = Vec::new();
    if let Some(ref assignee) = task.assignee {
        footer.push(initials(assignee));
    }
    if !task.comments.is_empty() {
        footer.push(format!("💬{}", task.comments.len()));
    }
    if let Some(points) = task.story_points {
        footer.push(format!("{}pt", points));
    }
    card_text.push(Line::from(footer.join(" | ")));

    let card_block = Paragraph::new(card_text)
        .block(Block::default().borders(Borders::ALL))
        .style(style)
        .wrap(Wrap { trim: true });

    f.render_widget(card_block, area);
}
