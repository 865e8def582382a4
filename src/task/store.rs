//! Task storage - one JSON file per task

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{LoadError, Result, SelectionError, StoreError};
use super::model::{Listing, TaskRecord, TaskStatus};

pub const TASK_FILE_EXTENSION: &str = "json";

/// Directory holding one `<name>.json` file per task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRoot(PathBuf);

impl StoreRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Backing file for a task name. Names are not sanitized.
    pub fn file_for(&self, name: &str) -> PathBuf {
        self.0.join(format!("{}.{}", name, TASK_FILE_EXTENSION))
    }

    /// The task stored at `path`, or None if the path is not a task file.
    /// Names that are not valid UTF-8 are listed lossily.
    fn task_file(&self, path: PathBuf) -> Option<TaskFile> {
        if path.extension().and_then(|e| e.to_str()) != Some(TASK_FILE_EXTENSION) {
            return None;
        }
        if !path.is_file() {
            return None;
        }
        let key = path.file_stem()?.to_string_lossy().into_owned();
        Some(TaskFile { key, path })
    }
}

/// A task file found in the store root
struct TaskFile {
    key: String,
    path: PathBuf,
}

/// What an update writes back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdatePolicy {
    /// Rewrite only the description; the status field is dropped
    #[default]
    DescriptionOnly,
    /// Rewrite the description and the merged status
    PreserveStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    Created(TaskRecord),
    Updated(TaskRecord),
}

impl Upserted {
    pub fn record(&self) -> &TaskRecord {
        match self {
            Self::Created(record) | Self::Updated(record) => record,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

pub struct TaskStore {
    root: StoreRoot,
    update_policy: UpdatePolicy,
}

impl TaskStore {
    /// Open a store, creating the root directory if needed
    pub fn open(root: StoreRoot) -> Result<Self> {
        fs::create_dir_all(root.path()).map_err(|e| StoreError::io(root.path(), e))?;
        Ok(Self {
            root,
            update_policy: UpdatePolicy::default(),
        })
    }

    pub fn with_update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.update_policy = policy;
        self
    }

    pub fn root(&self) -> &StoreRoot {
        &self.root
    }

    pub fn update_policy(&self) -> UpdatePolicy {
        self.update_policy
    }

    pub fn exists(&self, name: &str) -> bool {
        !name.is_empty() && self.root.file_for(name).exists()
    }

    /// Write a new task, replacing any existing one with the same name.
    /// The status is lower-cased but not checked against [`TaskStatus`].
    pub fn create(&self, name: &str, description: &str, status: &str) -> Result<TaskRecord> {
        validate_name(name)?;
        let record = TaskRecord::new(description, status.to_lowercase());
        self.write(name, &record)?;
        Ok(record)
    }

    /// Create the task if missing, otherwise merge the given fields into it.
    ///
    /// Empty or absent fields keep the stored value. With
    /// [`UpdatePolicy::DescriptionOnly`] the rewritten file has no status.
    pub fn upsert(
        &self,
        name: &str,
        description: Option<&str>,
        status: Option<&str>,
    ) -> Result<Upserted> {
        validate_name(name)?;
        let description = description.filter(|d| !d.is_empty());
        let status = status.filter(|s| !s.is_empty()).map(str::to_lowercase);

        if !self.exists(name) {
            let record = self.create(
                name,
                description.unwrap_or_default(),
                status.as_deref().unwrap_or_default(),
            )?;
            return Ok(Upserted::Created(record));
        }

        let existing = self.load(name)?;
        let description = description
            .map(str::to_string)
            .unwrap_or(existing.description);
        let status = match self.update_policy {
            UpdatePolicy::DescriptionOnly => None,
            UpdatePolicy::PreserveStatus => status.or(existing.status),
        };

        let record = TaskRecord {
            description,
            status,
        };
        self.write(name, &record)?;
        Ok(Upserted::Updated(record))
    }

    /// Read a task without any recovery
    pub fn try_load(&self, name: &str) -> std::result::Result<TaskRecord, LoadError> {
        read_record(&self.root.file_for(name))
    }

    /// Read a task, treating empty or corrupt content as an empty record
    pub fn load(&self, name: &str) -> Result<TaskRecord> {
        match self.try_load(name) {
            Ok(record) => Ok(record),
            Err(err @ (LoadError::Empty | LoadError::Malformed(_))) => {
                warn!("Recovering corrupt task '{}': {}", name, err);
                Ok(TaskRecord::default())
            }
            Err(LoadError::Missing) => Err(StoreError::NotFound(name.to_string())),
            Err(LoadError::Io(e)) => Err(StoreError::io(self.root.file_for(name), e)),
        }
    }

    fn task_files(&self) -> Result<impl Iterator<Item = TaskFile> + '_> {
        let entries =
            fs::read_dir(self.root.path()).map_err(|e| StoreError::io(self.root.path(), e))?;
        Ok(entries.filter_map(move |entry| match entry {
            Ok(entry) => self.root.task_file(entry.path()),
            Err(e) => {
                warn!(
                    "Skipping unreadable entry in {}: {}",
                    self.root.path().display(),
                    e
                );
                None
            }
        }))
    }

    /// Names of all task files, in directory order
    pub fn keys(&self) -> Result<impl Iterator<Item = String> + '_> {
        Ok(self.task_files()?.map(|file| file.key))
    }

    /// Every task, with unreadable ones replaced by a placeholder
    pub fn list_all(&self) -> Result<impl Iterator<Item = (String, Listing)> + '_> {
        Ok(self.task_files()?.map(|TaskFile { key, path }| {
            let listing = match read_record(&path) {
                Ok(record) => Listing::Loaded(record),
                Err(err) => {
                    debug!("Task '{}' unavailable: {}", key, err);
                    Listing::Unavailable(err)
                }
            };
            (key, listing)
        }))
    }

    /// Tasks whose stored status equals `status` exactly; unreadable tasks are skipped
    pub fn list_by_status(
        &self,
        status: &str,
    ) -> Result<impl Iterator<Item = (String, TaskRecord)> + '_> {
        let wanted = status.to_string();
        Ok(self
            .list_all()?
            .filter_map(move |(key, listing)| match listing {
                Listing::Loaded(record) if record.has_status(&wanted) => Some((key, record)),
                _ => None,
            }))
    }

    pub fn list_with_status(
        &self,
        status: TaskStatus,
    ) -> Result<impl Iterator<Item = (String, TaskRecord)> + '_> {
        self.list_by_status(status.label())
    }

    /// Capture the current task names for index-based selection
    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            keys: self.keys()?.collect(),
        })
    }

    /// First step of a deletion. Nothing is removed until the returned
    /// [`PendingDelete`] is resolved affirmatively.
    pub fn prepare_delete(&self, name: &str) -> Result<PendingDelete<'_>> {
        validate_name(name)?;
        let path = self.root.file_for(name);
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        Ok(PendingDelete {
            store: self,
            key: name.to_string(),
            path,
        })
    }

    /// Delete `name` if `confirm` agrees
    pub fn delete<F>(&self, name: &str, confirm: F) -> Result<DeleteOutcome>
    where
        F: FnOnce(&str) -> bool,
    {
        let pending = self.prepare_delete(name)?;
        let affirmative = confirm(pending.key());
        pending.resolve(affirmative)
    }

    fn write(&self, name: &str, record: &TaskRecord) -> Result<()> {
        let path = self.root.file_for(name);
        let content = to_pretty_json(record)?;
        fs::write(&path, content).map_err(|e| StoreError::io(&path, e))?;
        debug!("Wrote task '{}' to {}", name, path.display());
        Ok(())
    }
}

/// A deletion waiting for confirmation
#[must_use = "a pending delete does nothing until resolved"]
pub struct PendingDelete<'a> {
    store: &'a TaskStore,
    key: String,
    path: PathBuf,
}

impl PendingDelete<'_> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn resolve(self, affirmative: bool) -> Result<DeleteOutcome> {
        if !affirmative {
            debug!("Deletion of '{}' declined", self.key);
            return Ok(DeleteOutcome::Declined);
        }

        fs::remove_file(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        debug!(
            "Deleted task '{}' from {}",
            self.key,
            self.store.root.path().display()
        );
        Ok(DeleteOutcome::Deleted)
    }
}

/// Task names captured once, so an index picked by the user keeps
/// pointing at the same task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    keys: Vec<String>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Map a 1-based index typed by the user to a task name
    pub fn resolve(&self, input: &str) -> std::result::Result<&str, SelectionError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(SelectionError::Cancelled);
        }
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(SelectionError::NotANumber(input.to_string()));
        }

        let len = self.keys.len();
        // All digits, so a parse failure can only be overflow
        let index: usize = input.parse().map_err(|_| SelectionError::OutOfRange {
            index: usize::MAX,
            len,
        })?;
        if index == 0 || index > len {
            return Err(SelectionError::OutOfRange { index, len });
        }
        Ok(&self.keys[index - 1])
    }
}

fn read_record(path: &Path) -> std::result::Result<TaskRecord, LoadError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(LoadError::Missing),
        Err(e) => return Err(e.into()),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(LoadError::Empty);
    }

    Ok(serde_json::from_slice(&bytes)?)
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(())
}

fn to_pretty_json(record: &TaskRecord) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut ser)?;
    Ok(buf)
}
