//! Interactive menu, the default mode when no subcommand is given

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::warn;

use super::prompt::Prompter;
use crate::task::{
    DeleteOutcome, Listing, SelectionError, StoreError, TaskStatus, TaskStore, Upserted,
};

const MENU: &str = "\
Press 1 to create/open task, or q/quit to exit.
Press 2 to show all tasks
Press 3 to delete task
Press 4 to list tasks that are done
Press 5 to list tasks that are not done
Press 6 to list tasks in progress
";

const GOODBYE: &str = "Exiting program. Goodbye!";

pub fn run(store: &TaskStore) -> Result<()> {
    let stdin = io::stdin();
    Menu::new(store, stdin.lock(), io::stdout()).run()
}

pub struct Menu<'a, R, W> {
    store: &'a TaskStore,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user quits or input ends.
    ///
    /// Store errors end the current operation only; failures reading or
    /// writing the terminal end the session.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.prompter.output(), "{}", MENU)?;

            let Some(choice) = self.prompter.ask("Your choice: ")? else {
                writeln!(self.prompter.output(), "\n{}", GOODBYE)?;
                return Ok(());
            };

            let result = match choice.to_lowercase().as_str() {
                "1" => self.create_or_update(),
                "2" => self.show_all(),
                "3" => self.delete(),
                "4" => self.show_status(TaskStatus::Done),
                "5" => self.show_status(TaskStatus::NotDone),
                "6" => self.show_status(TaskStatus::InProgress),
                "q" | "quit" => {
                    writeln!(self.prompter.output(), "{}", GOODBYE)?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.prompter.output(), "Wrong input, try again.\n")?;
                    continue;
                }
            };

            if let Err(err) = result {
                if err.downcast_ref::<StoreError>().is_none() {
                    return Err(err);
                }
                warn!("Operation failed: {:#}", err);
                writeln!(self.prompter.output(), "Error: {:#}\n", err)?;
            }
        }
    }

    fn create_or_update(&mut self) -> Result<()> {
        let name = self
            .prompter
            .ask("Add task name:\n")?
            .unwrap_or_default();
        if name.is_empty() {
            writeln!(
                self.prompter.output(),
                "Task name cannot be empty. Try again.\n"
            )?;
            return Ok(());
        }

        let (description, status) = if self.store.exists(&name) {
            let existing = self.store.load(&name)?;
            writeln!(
                self.prompter.output(),
                "\nExisting description: {}",
                existing.description
            )?;
            let description = self
                .prompter
                .ask("\nEnter new description (or press Enter to keep existing):\n")?;
            let status = self.prompter.ask(
                "Enter new status (done / not done / in progress). Press Enter to keep existing:\n",
            )?;
            (description, status)
        } else {
            writeln!(self.prompter.output(), "\nCreating new task...\n")?;
            let description = self.prompter.ask("Enter task description:\n")?;
            let status = self
                .prompter
                .ask("Enter status (done / not done / in progress):\n")?;
            (description, status)
        };

        let upserted = self
            .store
            .upsert(&name, description.as_deref(), status.as_deref())?;
        let message = match upserted {
            Upserted::Created(_) => "Task created successfully!",
            Upserted::Updated(_) => "Task updated successfully!",
        };
        writeln!(self.prompter.output(), "\n{}\n", message)?;
        Ok(())
    }

    fn show_all(&mut self) -> Result<()> {
        let store = self.store;
        let mut listed = store.list_all()?.peekable();
        let out = self.prompter.output();

        if listed.peek().is_none() {
            writeln!(out, "No tasks found.")?;
            return Ok(());
        }

        writeln!(out, "\nAll Saved Tasks:\n")?;
        for (key, listing) in listed {
            writeln!(out, "Task: {}", key)?;
            if let Listing::Unavailable(err) = &listing {
                writeln!(out, "  (Error reading file: {})", err)?;
            }
            writeln!(out, "  Description: {}", listing.description())?;
            writeln!(out, "  Status: {}\n", listing.status())?;
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let store = self.store;
        let snapshot = store.snapshot()?;

        if snapshot.is_empty() {
            writeln!(self.prompter.output(), "\nNo tasks found to delete.\n")?;
            return Ok(());
        }

        writeln!(self.prompter.output(), "\nAvailable tasks:\n")?;
        for (index, key) in snapshot.keys().iter().enumerate() {
            writeln!(self.prompter.output(), "{}. {}", index + 1, key)?;
        }

        let choice = self
            .prompter
            .ask("\nEnter task number to delete (or 'q' to cancel): ")?
            .unwrap_or_else(|| "q".to_string());

        let key = match snapshot.resolve(&choice) {
            Ok(key) => key,
            Err(SelectionError::Cancelled) => {
                writeln!(self.prompter.output(), "Cancelled.\n")?;
                return Ok(());
            }
            Err(err) => {
                writeln!(self.prompter.output(), "{}\n", err)?;
                return Ok(());
            }
        };

        let pending = store.prepare_delete(key)?;
        let confirmed = self.prompter.confirm(&format!(
            "Are you sure you want to delete '{}'? (y/n): ",
            key
        ))?;

        match pending.resolve(confirmed)? {
            DeleteOutcome::Deleted => writeln!(
                self.prompter.output(),
                "\nTask '{}' deleted successfully!\n",
                key
            )?,
            DeleteOutcome::Declined => writeln!(self.prompter.output(), "Deletion cancelled.\n")?,
        }
        Ok(())
    }

    fn show_status(&mut self, status: TaskStatus) -> Result<()> {
        let store = self.store;
        let out = self.prompter.output();

        writeln!(out, "\n{}:\n", status.heading())?;
        for (key, record) in store.list_with_status(status)? {
            writeln!(out, "- {}: {}", key, record.description)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
