//! `tasktracker add` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::task::{TaskStatus, TaskStore, Upserted};

#[derive(Args)]
pub struct AddArgs {
    /// Task name, also used as the file name
    name: String,

    /// Task description (keeps the existing one when omitted)
    #[arg(short = 'd', long)]
    description: Option<String>,

    /// Status: done, not done or in progress (keeps the existing one when omitted)
    #[arg(short = 's', long)]
    status: Option<String>,
}

pub fn run(store: &TaskStore, args: AddArgs) -> Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        bail!("Task name cannot be empty");
    }

    let description = args.description.as_deref().map(str::trim);
    let status = args.status.as_deref().map(str::trim);

    if let Some(status) = status.filter(|s| !s.is_empty()) {
        if TaskStatus::parse(&status.to_lowercase()).is_none() {
            eprintln!(
                "Warning: '{}' is not one of: done, not done, in progress. \
                 It will be saved but never shown by status filters.",
                status
            );
        }
    }

    match store.upsert(name, description, status)? {
        Upserted::Created(record) => println!(
            "Created task '{}' ({})",
            name,
            record.status.as_deref().unwrap_or("")
        ),
        Upserted::Updated(_) => println!("Updated task '{}'", name),
    }

    Ok(())
}
