// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskgate`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskgate",
    version,
    about = "Run a graph of quality-gate tasks in dependency order, stopping at the first failure.",
    long_about = None
)]
pub struct CliArgs {
    /// Task to run. Its prerequisites run first.
    #[arg(value_name = "TASK", default_value = "check")]
    pub task: String,

    /// Path to the task file (TOML).
    ///
    /// If omitted, `Taskgate.toml` in the current directory is used when it
    /// exists, otherwise the built-in quality gate.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Project source tree handed to every task command.
    ///
    /// Overrides `[config].project_dir` from the task file.
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKGATE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the execution order, but don't run any commands.
    #[arg(long)]
    pub dry_run: bool,

    /// List declared tasks and exit.
    #[arg(long, conflicts_with = "dry_run")]
    pub list: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
