//! `tasktracker remove` command implementation

use anyhow::Result;
use clap::Args;
use std::io;

use super::prompt::Prompter;
use crate::task::{DeleteOutcome, TaskStore};

#[derive(Args)]
pub struct RemoveArgs {
    /// Task name
    name: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub fn run(store: &TaskStore, args: RemoveArgs) -> Result<()> {
    let pending = store.prepare_delete(args.name.trim())?;

    let confirmed = args.yes || {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter.confirm(&format!(
            "Are you sure you want to delete '{}'? (y/n): ",
            pending.key()
        ))?
    };

    match pending.resolve(confirmed)? {
        DeleteOutcome::Deleted => println!("Task '{}' deleted.", args.name.trim()),
        DeleteOutcome::Declined => println!("Deletion cancelled."),
    }

    Ok(())
}
