use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Kanban-style project tracker.
/// State lives in ~/.projectflow or a directory passed via --data-dir.
#[derive(Parser)]
#[command(name = "pf", version, about = "Kanban project tracker CLI")]
pub struct Cli {
    /// Directory holding the saved board state.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
