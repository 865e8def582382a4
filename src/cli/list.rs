//! `tasktracker list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::task::{Listing, TaskStore};

const TABLE_COL_NAME: usize = 24;
const TABLE_COL_STATUS: usize = 14;
const TABLE_COL_DESCRIPTION: usize = 50;

#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks whose status is exactly this value (e.g. "done")
    #[arg(short = 's', long)]
    status: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TaskJson {
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    available: bool,
}

impl TaskJson {
    fn from_listing(name: String, listing: &Listing) -> Self {
        match listing.record() {
            Some(record) => Self {
                name,
                description: record.description.clone(),
                status: record.status.clone(),
                available: true,
            },
            None => Self {
                name,
                description: String::new(),
                status: None,
                available: false,
            },
        }
    }
}

fn print_table_header() {
    println!(
        "{:<width_name$} {:<width_status$} DESCRIPTION",
        "NAME",
        "STATUS",
        width_name = TABLE_COL_NAME,
        width_status = TABLE_COL_STATUS
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_NAME + TABLE_COL_STATUS + TABLE_COL_DESCRIPTION + 2)
    );
}

fn print_table_row(name: &str, status: &str, description: &str) {
    println!(
        "{:<width_name$} {:<width_status$} {}",
        super::truncate(name, TABLE_COL_NAME),
        super::truncate(status, TABLE_COL_STATUS),
        super::truncate(description, TABLE_COL_DESCRIPTION),
        width_name = TABLE_COL_NAME,
        width_status = TABLE_COL_STATUS
    );
}

pub fn run(store: &TaskStore, args: ListArgs) -> Result<()> {
    let rows: Vec<(String, Listing)> = match &args.status {
        Some(status) => store
            .list_by_status(status)?
            .map(|(name, record)| (name, Listing::Loaded(record)))
            .collect(),
        None => store.list_all()?.collect(),
    };

    if args.json {
        let tasks: Vec<TaskJson> = rows
            .iter()
            .map(|(name, listing)| TaskJson::from_listing(name.clone(), listing))
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if rows.is_empty() {
        match &args.status {
            Some(status) => println!("No tasks with status '{}'.", status),
            None => println!("No tasks found in {}.", store.root().path().display()),
        }
        return Ok(());
    }

    print_table_header();
    for (name, listing) in &rows {
        print_table_row(name, listing.status(), listing.description());
    }
    println!("\nTotal: {} tasks", rows.len());

    Ok(())
}
