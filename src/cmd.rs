//! Command implementations for the CLI interface.
//!
//! This module contains all the command handlers behind the subcommands,
//! from project and task CRUD to the interactive board TUI. Handlers talk
//! to the [`Board`] controller; anything user-facing that goes wrong is
//! printed to stderr and exits nonzero.

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use std::io;

use crate::board::Board;
use crate::cli::Cli;
use crate::demo;
use crate::fields::{format_priority, format_status, Priority, Status};
use crate::store::JsonStore;
use crate::task::{Task, TaskDraft};
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive kanban board.
    Ui,

    /// Open the project menu (interactive mode).
    Menu,

    /// Create a new project and select it.
    NewProject {
        /// Project name.
        name: String,
        /// Short uppercase key (e.g. MAP). Derived from the name if omitted.
        #[arg(long)]
        key: Option<String>,
        /// Free-text description.
        #[arg(long, default_value = "")]
        desc: String,
    },

    /// List projects.
    Projects,

    /// Select the current project by id or key.
    Switch {
        /// Project id or key (key matches ignore case).
        project: String,
    },

    /// Add a task to the current project.
    Add {
        /// Short title for the task.
        title: String,
        /// Task description or user story.
        #[arg(long)]
        desc: Option<String>,
        /// Priority: low | medium | high | urgent.
        #[arg(long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
        /// Assignee name.
        #[arg(long)]
        assignee: Option<String>,
        /// Story points (1-21).
        #[arg(long)]
        points: Option<u32>,
    },

    /// List tasks in the current project.
    List {
        /// Filter by status.
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Filter by priority.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Filter by assignee name.
        #[arg(long)]
        assignee: Option<String>,
    },

    /// View a single task with its comments.
    View {
        /// Task id within the current project.
        id: String,
    },

    /// Move a task to another status column.
    Move {
        /// Task id within the current project.
        id: String,
        /// Target status: todo | progress | review | done.
        #[arg(value_enum)]
        status: Status,
    },

    /// Append a comment to a task.
    Comment {
        /// Task id within the current project.
        id: String,
        /// Comment text.
        content: String,
    },

    /// Update fields on a task.
    Update {
        /// Task id within the current project.
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        #[arg(long)]
        assignee: Option<String>,
        /// Story points (1-21).
        #[arg(long)]
        points: Option<u32>,
        /// Outcome note.
        #[arg(long)]
        outcome: Option<String>,
        /// Clear the assignee.
        #[arg(long)]
        clear_assignee: bool,
        /// Clear the outcome note.
        #[arg(long)]
        clear_outcome: bool,
    },

    /// Replace the board with the bundled demo projects.
    Seed {
        /// Overwrite existing projects.
        #[arg(long)]
        force: bool,
    },

    /// Remove all saved state.
    Clear,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the board TUI, falling back to the menu when nothing is selected.
pub fn cmd_ui(board: &mut Board<JsonStore>) {
    let open_menu_first = board.current_project().is_none();
    if let Err(e) = run_tui(board, open_menu_first) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Launch the project menu TUI.
pub fn cmd_menu(board: &mut Board<JsonStore>) {
    if let Err(e) = run_tui(board, true) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Create a new project; the key defaults to the name's initials.
pub fn cmd_new_project(board: &mut Board<JsonStore>, name: String, key: Option<String>, desc: String) {
    let key = key.unwrap_or_else(|| crate::project::suggest_key(&name));
    match board.create_project(&name, &key, &desc) {
        Ok(_) => {
            let project = board.current_project().expect("just created");
            println!("Created project {} [{}]", project.name, project.key);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// List all projects, marking the current selection.
pub fn cmd_projects(board: &Board<JsonStore>) {
    if board.projects().is_empty() {
        println!("No projects yet. Create one with `pf new-project`.");
        return;
    }
    let current_id = board.current_project().map(|p| p.id.clone());
    println!("{:<3} {:<10} {:<30} {:<6} {}", "", "Key", "Name", "Tasks", "Created");
    for project in board.projects() {
        let marker = if current_id.as_deref() == Some(project.id.as_str()) { "*" } else { "" };
        println!(
            "{:<3} {:<10} {:<30} {:<6} {}",
            marker,
            project.key,
            truncate(&project.name, 30),
            project.tasks.len(),
            project.created_at.format("%Y-%m-%d")
        );
    }
}

/// Switch the current project by id or key.
pub fn cmd_switch(board: &mut Board<JsonStore>, ident: String) {
    let Some(id) = board.resolve_project(&ident).map(|p| p.id.clone()) else {
        eprintln!("No project matching '{ident}'.");
        std::process::exit(1);
    };
    board.select_project(&id);
    let project = board.current_project().expect("just selected");
    println!("Switched to {} [{}]", project.name, project.key);
}

/// Add a task to the current project.
pub fn cmd_add(
    board: &mut Board<JsonStore>,
    title: String,
    desc: Option<String>,
    priority: Priority,
    assignee: Option<String>,
    points: Option<u32>,
) {
    let project_id = require_current_project(board);
    let draft = TaskDraft {
        title,
        description: desc.unwrap_or_default(),
        priority,
        assignee,
        reporter: board.user().to_string(),
        story_points: points,
    };
    if let Err(e) = board.add_task(&project_id, draft) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    let project = board.current_project().expect("selected above");
    let task = project.tasks.last().expect("just added");
    println!("Added task {} to {} [{}]", task.id, project.name, project.key);
}

/// List tasks in the current project with optional filters.
pub fn cmd_list(
    board: &Board<JsonStore>,
    status: Option<Status>,
    priority: Option<Priority>,
    assignee: Option<String>,
) {
    let Some(project) = board.current_project() else {
        eprintln!("No project selected. Use `pf switch` or `pf new-project` first.");
        std::process::exit(1);
    };

    let filtered: Vec<&Task> = project
        .tasks
        .iter()
        .filter(|t| {
            if let Some(s) = status {
                if t.status != s {
                    return false;
                }
            }
            if let Some(p) = priority {
                if t.priority != p {
                    return false;
                }
            }
            if let Some(ref a) = assignee {
                if t.assignee.as_deref() != Some(a.as_str()) {
                    return false;
                }
            }
            true
        })
        .collect();

    println!("Project {} [{}] — {} of {} tasks", project.name, project.key, filtered.len(), project.tasks.len());
    print_table(&filtered);
}

/// View detailed information about a task, comments included.
pub fn cmd_view(board: &Board<JsonStore>, id: String) {
    let task = require_task(board, &id);
    println!("ID:        {}", task.id);
    println!("Title:     {}", task.title);
    println!("Status:    {}", format_status(task.status));
    println!("Priority:  {}", format_priority(task.priority));
    println!("Assignee:  {}", task.assignee.as_deref().unwrap_or("-"));
    println!("Reporter:  {}", task.reporter);
    println!("Points:    {}", task.story_points.map(|p| p.to_string()).unwrap_or_else(|| "-".into()));
    println!("Created:   {}", task.created_at.to_rfc3339());
    println!("Updated:   {}", task.updated_at.to_rfc3339());
    if let Some(ref outcome) = task.outcome {
        println!("Outcome:   {outcome}");
    }
    println!("Description:\n{}\n", task.description);

    println!("Comments ({}):", task.comments.len());
    for comment in &task.comments {
        println!(
            "  [{}] {}: {}",
            comment.created_at.format("%Y-%m-%d"),
            comment.author,
            comment.content
        );
    }
}

/// Move a task to another column.
pub fn cmd_move(board: &mut Board<JsonStore>, id: String, status: Status) {
    require_task(board, &id);
    board.change_task_status(&id, status);
    println!("Task {} moved to {}", id, format_status(status));
}

/// Append a comment to a task.
pub fn cmd_comment(board: &mut Board<JsonStore>, id: String, content: String) {
    require_task(board, &id);
    if content.trim().is_empty() {
        eprintln!("Comment text is empty; nothing to add.");
        std::process::exit(1);
    }
    board.add_comment(&id, &content);
    println!("Comment added to task {id}");
}

/// Update task fields by submitting a full replacement snapshot.
pub fn cmd_update(
    board: &mut Board<JsonStore>,
    id: String,
    title: Option<String>,
    desc: Option<String>,
    priority: Option<Priority>,
    assignee: Option<String>,
    points: Option<u32>,
    outcome: Option<String>,
    clear_assignee: bool,
    clear_outcome: bool,
) {
    let mut task = require_task(board, &id);
    if let Some(title) = title {
        if title.trim().is_empty() {
            eprintln!("Error: task title cannot be empty");
            std::process::exit(1);
        }
        task.title = title.trim().to_string();
    }
    if let Some(desc) = desc {
        if desc.trim().is_empty() {
            eprintln!("Error: task description cannot be empty");
            std::process::exit(1);
        }
        task.description = desc.trim().to_string();
    }
    if let Some(priority) = priority {
        task.priority = priority;
    }
    if let Some(assignee) = assignee {
        task.assignee = Some(assignee);
    }
    if clear_assignee {
        task.assignee = None;
    }
    if let Some(points) = points {
        task.story_points = Some(points);
    }
    if let Some(outcome) = outcome {
        task.outcome = Some(outcome);
    }
    if clear_outcome {
        task.outcome = None;
    }
    task.touch();
    board.update_task(task);
    println!("Updated task {id}");
}

/// Replace the board with demo data.
pub fn cmd_seed(board: &mut Board<JsonStore>, force: bool) {
    if !board.projects().is_empty() && !force {
        eprintln!("Board already has projects; pass --force to overwrite them.");
        std::process::exit(1);
    }
    board.replace_all(demo::sample_projects());
    println!("Seeded {} demo projects.", board.projects().len());
}

/// Remove both storage slots and reset in-memory state.
pub fn cmd_clear(board: &mut Board<JsonStore>) {
    board.clear_all();
    println!("Cleared all saved state.");
}

/// Generate completions for the given shell on stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "pf", &mut io::stdout());
}

/// The current project's id, or a fatal error if nothing is selected.
fn require_current_project(board: &Board<JsonStore>) -> String {
    match board.current_project() {
        Some(project) => project.id.clone(),
        None => {
            eprintln!("No project selected. Use `pf switch` or `pf new-project` first.");
            std::process::exit(1);
        }
    }
}

/// Look up a task in the current project, or exit with a message.
fn require_task(board: &Board<JsonStore>, id: &str) -> Task {
    let project_id = require_current_project(board);
    let project = board
        .projects()
        .iter()
        .find(|p| p.id == project_id)
        .expect("current project exists");
    match project.task(id) {
        Some(task) => task.clone(),
        None => {
            eprintln!("Task {} not found in {} [{}].", id, project.name, project.key);
            std::process::exit(1);
        }
    }
}

/// Print tasks in a formatted table.
pub fn print_table(tasks: &[&Task]) {
    println!(
        "{:<5} {:<12} {:<8} {:<4} {:<16} {:<11} {}",
        "ID", "Status", "Pri", "Pts", "Assignee", "Updated", "Title"
    );
    for t in tasks {
        println!(
            "{:<5} {:<12} {:<8} {:<4} {:<16} {:<11} {}",
            t.id,
            format_status(t.status),
            format_priority(t.priority),
            t.story_points.map(|p| p.to_string()).unwrap_or_else(|| "-".into()),
            truncate(t.assignee.as_deref().unwrap_or("-"), 16),
            t.updated_at.format("%Y-%m-%d"),
            t.title
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
