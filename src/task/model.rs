//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::LoadError;

/// Recognized task status
///
/// The store keeps whatever string it was given; these are the values the
/// status filters know how to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Done,
    NotDone,
    InProgress,
}

impl TaskStatus {
    /// All recognized statuses, in menu order
    pub const ALL: [TaskStatus; 3] = [Self::Done, Self::NotDone, Self::InProgress];

    /// Parse a stored status string. Exact, case-sensitive match.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "done" => Some(Self::Done),
            "not done" => Some(Self::NotDone),
            "in progress" => Some(Self::InProgress),
            _ => None,
        }
    }

    /// The literal string written to disk
    pub fn label(&self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::NotDone => "not done",
            Self::InProgress => "in progress",
        }
    }

    /// Heading used when listing tasks with this status
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Done => "Tasks that are DONE",
            Self::NotDone => "Tasks that are NOT DONE",
            Self::InProgress => "Tasks IN PROGRESS",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored task. The name lives in the file name, not in the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub description: String,

    /// Raw status string; unrecognized values are kept as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TaskRecord {
    pub fn new(description: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: Some(status.into()),
        }
    }

    /// The recognized status, if the stored value is one
    pub fn known_status(&self) -> Option<TaskStatus> {
        self.status.as_deref().and_then(TaskStatus::parse)
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status.as_deref() == Some(status)
    }
}

/// One entry of a full listing
#[derive(Debug)]
pub enum Listing {
    Loaded(TaskRecord),
    /// The record could not be read; shown as a placeholder
    Unavailable(LoadError),
}

impl Listing {
    pub const PLACEHOLDER: &'static str = "Not available";

    pub fn description(&self) -> &str {
        match self {
            Self::Loaded(record) => &record.description,
            Self::Unavailable(_) => Self::PLACEHOLDER,
        }
    }

    pub fn status(&self) -> &str {
        match self {
            Self::Loaded(record) => record.status.as_deref().unwrap_or("not set"),
            Self::Unavailable(_) => Self::PLACEHOLDER,
        }
    }

    pub fn record(&self) -> Option<&TaskRecord> {
        match self {
            Self::Loaded(record) => Some(record),
            Self::Unavailable(_) => None,
        }
    }
}
