//! Task Tracker - file-backed command-line task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use task_tracker::cli::{self, Cli, Commands};
use task_tracker::config::Config;

fn main() -> Result<()> {
    if std::env::var("TASK_TRACKER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("task_tracker=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Completions need neither the config nor a store
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "tasktracker", &mut std::io::stdout());
        return Ok(());
    }

    let config = cli::resolve_config(&cli, Config::load())?;
    let store = cli::open_store(&cli, &config)?;

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&store, args),
        Some(Commands::List(args)) => cli::list::run(&store, args),
        Some(Commands::Remove(args)) => cli::remove::run(&store, args),
        None => cli::menu::run(&store),
        _ => unreachable!(),
    }
}
