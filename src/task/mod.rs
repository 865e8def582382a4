//! Task management module
//!
//! Tasks are stored one JSON file per task under a store root:
//! - Create, update and delete tasks by name
//! - List all tasks, or only those with a given status
//! - Recover from empty or corrupt task files instead of failing

pub mod error;
pub mod model;
pub mod store;

pub use error::{LoadError, SelectionError, StoreError};
pub use model::{Listing, TaskRecord, TaskStatus};
pub use store::{
    DeleteOutcome, PendingDelete, Snapshot, StoreRoot, TaskStore, UpdatePolicy, Upserted,
};
