//! End-to-end tests for the tasktracker binary
//!
//! The binary is run with HOME and XDG_CONFIG_HOME pointed at a temporary
//! directory so no user config leaks in.

use std::path::Path;
use std::process::{Command, Output};

fn tasktracker(home: &Path, root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tasktracker"))
        .args(args)
        .arg("--root")
        .arg(root)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TASK_TRACKER_ROOT")
        .env_remove("TASK_TRACKER_DEBUG")
        .output()
        .expect("Failed to run tasktracker")
}

#[test]
fn test_add_and_list_json() {
    let home = tempfile::TempDir::new().unwrap();
    let root = home.path().join("tasks");

    let out = tasktracker(
        home.path(),
        &root,
        &["add", "alpha", "-d", "write spec", "-s", "in progress"],
    );
    assert!(out.status.success());
    assert!(root.join("alpha.json").is_file());

    let out = tasktracker(home.path(), &root, &["list", "--json", "-s", "in progress"]);
    assert!(out.status.success());

    let tasks: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["name"], "alpha");
    assert_eq!(tasks[0]["description"], "write spec");
}

#[test]
fn test_remove_with_yes() {
    let home = tempfile::TempDir::new().unwrap();
    let root = home.path().join("tasks");

    assert!(tasktracker(home.path(), &root, &["add", "gone", "-d", "x"])
        .status
        .success());

    let out = tasktracker(home.path(), &root, &["remove", "gone", "-y"]);
    assert!(out.status.success());
    assert!(!root.join("gone.json").exists());
}

#[test]
fn test_remove_missing_task_fails() {
    let home = tempfile::TempDir::new().unwrap();
    let root = home.path().join("tasks");

    let out = tasktracker(home.path(), &root, &["remove", "ghost", "-y"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Task not found: ghost"));
}

#[test]
fn test_menu_quits_on_end_of_input() {
    let home = tempfile::TempDir::new().unwrap();
    let root = home.path().join("tasks");

    let out = tasktracker(home.path(), &root, &[]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Goodbye!"));
}
