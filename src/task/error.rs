use std::path::PathBuf;
use thiserror::Error;

/// Why a single record could not be read
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Task file does not exist")]
    Missing,

    #[error("Task file is empty")]
    Empty,

    #[error("Task file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task name cannot be empty")]
    EmptyName,

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize task: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why an index typed at the delete prompt did not select a task
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Cancelled")]
    Cancelled,

    #[error("Invalid input '{0}'. Enter number only.")]
    NotANumber(String),

    #[error("Invalid task number {index} (expected 1-{len})")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;
