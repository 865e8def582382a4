//! Command-line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;

#[derive(Parser)]
#[command(name = "tasktracker")]
#[command(version, about = "Track tasks as one JSON file per task")]
#[command(
    long_about = "Track tasks as one JSON file per task.\n\n\
                  Run without a subcommand for the interactive menu."
)]
pub struct Cli {
    /// Directory holding the task files (defaults to the current directory)
    #[arg(long, global = true, env = "TASK_TRACKER_ROOT")]
    pub root: Option<PathBuf>,

    /// Keep the status when updating an existing task
    #[arg(long, global = true)]
    pub preserve_status: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a task, or update it if it already exists
    Add(AddArgs),

    /// List tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
