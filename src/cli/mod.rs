//! CLI command implementations

pub mod add;
pub mod definition;
pub mod list;
pub mod menu;
pub mod prompt;
pub mod remove;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::Config;
use crate::task::{StoreRoot, TaskStore, UpdatePolicy};

/// The config to run with, given the result of loading it.
///
/// An explicit `--root` does not need the config file, so failing to load it
/// only warns and falls back to the defaults.
pub fn resolve_config(cli: &Cli, loaded: Result<Config>) -> Result<Config> {
    match loaded {
        Ok(config) => Ok(config),
        Err(err) if cli.root.is_some() => {
            warn!("Ignoring config: {:#}", err);
            Ok(Config::default())
        }
        Err(err) => Err(err),
    }
}

/// Open the task store selected by the command line and config.
///
/// Root precedence: `--root` / `TASK_TRACKER_ROOT`, then `store.root` from the
/// config file, then the current directory.
pub fn open_store(cli: &Cli, config: &Config) -> Result<TaskStore> {
    let root = match cli.root.clone().or_else(|| config.store.root_path()) {
        Some(path) => path,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let policy = if cli.preserve_status {
        UpdatePolicy::PreserveStatus
    } else {
        config.store.update_policy
    };

    let store = TaskStore::open(StoreRoot::new(&root))
        .with_context(|| format!("Cannot open task store at {}", root.display()))?;
    debug!("Using task store at {} ({:?})", root.display(), policy);

    Ok(store.with_update_policy(policy))
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}
