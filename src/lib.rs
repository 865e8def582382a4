//! Task Tracker library - one JSON file per task, with a CLI on top

pub mod cli;
pub mod config;
pub mod task;
