//! # ProjectFlow - Kanban Project Tracker
//!
//! A kanban-style project and task tracker with an interactive terminal
//! board and a scripting-friendly CLI.
//!
//! ## Key Features
//!
//! - **Kanban Board**: Tasks move across four columns (To Do → In Progress →
//!   Review → Done) with unrestricted transitions
//! - **Multi-Project Support**: Any number of projects, each identified by a
//!   short uppercase key (e.g. `TMP`), with one active selection
//! - **Task Metadata**: Priority, assignee, reporter, story points, outcome
//!   notes, and an append-only comment trail per task
//! - **Multiple Interfaces**: Full CLI for automation + interactive TUI for
//!   visual management
//! - **Local Storage**: Two JSON slots in `~/.projectflow`, tolerant of
//!   missing or corrupt data
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interactive board (opens the project menu on first run)
//! pf ui
//!
//! # Create a project and add a task via CLI
//! pf new-project "Task Management Platform" --key TMP
//! pf add "Implement user authentication" --desc "OAuth sign-in" --priority high
//!
//! # Move it across the board and leave a note
//! pf move 1 progress
//! pf comment 1 "Started on the token flow"
//!
//! # Inspect
//! pf list --status progress
//! pf view 1
//! ```
//!
//! ## Key Commands
//!
//! - `pf ui` - Launch the kanban board TUI
//! - `pf menu` - Open the project selection menu
//! - `pf add <title>` - Create a task in the current project
//! - `pf list` - View tasks with filtering
//! - `pf seed` - Populate the board with demo projects
//!
//! State is stored locally in `~/.projectflow/` as plain JSON. We recommend
//! you source control this folder via `git init` and back it up periodically.

use std::path::PathBuf;

use clap::Parser;

pub mod board;
pub mod cli;
pub mod cmd;
pub mod demo;
pub mod fields;
pub mod project;
pub mod store;
pub mod task;
pub mod tui {
    pub mod board;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod menu;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use board::Board;
use cli::Cli;
use cmd::*;
use store::JsonStore;

fn main() {
    let cli = Cli::parse();

    // Commands that never touch the data directory.
    if let Commands::Completions { shell } = &cli.command {
        cmd_completions(*shell);
        return;
    }

    // Determine the data directory.
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".projectflow")
    });
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("Failed to create data directory {}: {}", data_dir.display(), e);
        std::process::exit(1);
    }

    let user = std::env::var("USER").unwrap_or_else(|_| "Current User".to_string());
    let mut board = Board::open(JsonStore::new(&data_dir), user);

    match cli.command {
        Commands::Completions { .. } => unreachable!("handled above"),

        Commands::Ui => cmd_ui(&mut board),

        Commands::Menu => cmd_menu(&mut board),

        Commands::NewProject { name, key, desc } => cmd_new_project(&mut board, name, key, desc),

        Commands::Projects => cmd_projects(&board),

        Commands::Switch { project } => cmd_switch(&mut board, project),

        Commands::Add { title, desc, priority, assignee, points } =>
            cmd_add(&mut board, title, desc, priority, assignee, points),

        Commands::List { status, priority, assignee } =>
            cmd_list(&board, status, priority, assignee),

        Commands::View { id } => cmd_view(&board, id),

        Commands::Move { id, status } => cmd_move(&mut board, id, status),

        Commands::Comment { id, content } => cmd_comment(&mut board, id, content),

        Commands::Update {
            id, title, desc, priority, assignee, points, outcome,
            clear_assignee, clear_outcome,
        } => cmd_update(&mut board, id, title, desc, priority, assignee, points, outcome,
                        clear_assignee, clear_outcome),

        Commands::Seed { force } => cmd_seed(&mut board, force),

        Commands::Clear => cmd_clear(&mut board),
    }
}
