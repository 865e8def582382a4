//! Integration tests for the interactive menu
//!
//! Each test feeds a scripted session through the menu and checks both the
//! printed output and the files left in the store.

use std::io::Cursor;

use task_tracker::cli::menu::Menu;
use task_tracker::task::{StoreRoot, TaskStore};

fn setup_store() -> (tempfile::TempDir, TaskStore) {
    let temp = tempfile::TempDir::new().unwrap();
    let store = TaskStore::open(StoreRoot::new(temp.path())).unwrap();
    (temp, store)
}

fn run_session(store: &TaskStore, script: &str) -> String {
    let mut out = Vec::new();
    Menu::new(store, Cursor::new(script.to_string()), &mut out)
        .run()
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_create_then_update_keeps_description() {
    let (_temp, store) = setup_store();

    let out = run_session(&store, "1\nbeta\ndraft\nNot Done\n1\nbeta\n\ndone\nq\n");

    assert!(out.contains("Creating new task..."));
    assert!(out.contains("Task created successfully!"));
    assert!(out.contains("Existing description: draft"));
    assert!(out.contains("Task updated successfully!"));

    let record = store.load("beta").unwrap();
    assert_eq!(record.description, "draft");
    assert_eq!(record.status, None);
}

#[test]
fn test_show_all_with_placeholder() {
    let (temp, store) = setup_store();

    store.create("alpha", "write spec", "in progress").unwrap();
    std::fs::write(temp.path().join("broken.json"), "not json").unwrap();

    let out = run_session(&store, "2\nq\n");

    assert!(out.contains("All Saved Tasks:"));
    assert!(out.contains("Task: alpha"));
    assert!(out.contains("  Description: write spec"));
    assert!(out.contains("  Status: in progress"));
    assert!(out.contains("Task: broken"));
    assert!(out.contains("  Description: Not available"));
    assert!(out.contains("  Status: Not available"));
}

#[test]
fn test_show_all_empty() {
    let (_temp, store) = setup_store();
    let out = run_session(&store, "2\nq\n");
    assert!(out.contains("No tasks found."));
}

#[test]
fn test_status_listings() {
    let (_temp, store) = setup_store();

    store.create("alpha", "write spec", "in progress").unwrap();
    store.create("beta", "review", "done").unwrap();
    store.create("gamma", "plan", "not done").unwrap();

    let out = run_session(&store, "4\n5\n6\nq\n");

    let done = out.find("Tasks that are DONE:").unwrap();
    let not_done = out.find("Tasks that are NOT DONE:").unwrap();
    let in_progress = out.find("Tasks IN PROGRESS:").unwrap();
    assert!(done < not_done && not_done < in_progress);

    assert!(out[done..not_done].contains("- beta: review"));
    assert!(!out[done..not_done].contains("alpha"));
    assert!(out[not_done..in_progress].contains("- gamma: plan"));
    assert!(out[in_progress..].contains("- alpha: write spec"));
}

#[test]
fn test_delete_confirmed() {
    let (temp, store) = setup_store();

    store.create("only", "x", "done").unwrap();

    let out = run_session(&store, "3\n1\ny\nq\n");

    assert!(out.contains("1. only"));
    assert!(out.contains("Are you sure you want to delete 'only'? (y/n): "));
    assert!(out.contains("Task 'only' deleted successfully!"));
    assert!(!temp.path().join("only.json").exists());
}

#[test]
fn test_delete_declined() {
    let (temp, store) = setup_store();

    store.create("only", "x", "done").unwrap();

    let out = run_session(&store, "3\n1\nn\nq\n");

    assert!(out.contains("Deletion cancelled."));
    assert!(temp.path().join("only.json").exists());
}

#[test]
fn test_delete_invalid_selections() {
    let (temp, store) = setup_store();

    store.create("only", "x", "done").unwrap();

    let out = run_session(&store, "3\nabc\n3\n5\n3\nq\nq\n");

    assert!(out.contains("Enter number only."));
    assert!(out.contains("Invalid task number 5"));
    assert!(out.contains("Cancelled."));
    assert!(temp.path().join("only.json").exists());
}

#[test]
fn test_delete_with_no_tasks() {
    let (_temp, store) = setup_store();
    let out = run_session(&store, "3\nq\n");
    assert!(out.contains("No tasks found to delete."));
}

#[test]
fn test_end_of_input_mid_operation_declines() {
    let (temp, store) = setup_store();

    store.create("only", "x", "done").unwrap();

    let out = run_session(&store, "3\n1\n");

    assert!(out.contains("Deletion cancelled."));
    assert!(out.contains("Exiting program. Goodbye!"));
    assert!(temp.path().join("only.json").exists());
}
