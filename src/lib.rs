// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::{load_and_validate, quality_gate, resolve_config_path, ConfigFile};
use crate::dag::Registry;
use crate::engine::{Executor, RunOutcome};
use crate::errors::Result;
use crate::exec::ProcessRunner;

/// Exit status for configuration errors (bad task file, unknown task, cycle).
///
/// `EX_CONFIG` from `sysexits.h`; the checkers run by the gate do not use it.
pub const CONFIG_ERROR_EXIT_CODE: i32 = 78;

/// Project directory used when neither the CLI nor the task file names one.
pub const DEFAULT_PROJECT_DIR: &str = ".";

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task file loading (or the built-in quality gate)
/// - the registry, with the project directory baked into every action
/// - the executor over real processes
///
/// Returns the exit status the process should end with.
pub fn run(args: CliArgs) -> Result<i32> {
    let cfg = load_config(args.config.as_deref())?;

    let project_dir = args
        .project_dir
        .clone()
        .or_else(|| cfg.config.project_dir.clone())
        .unwrap_or_else(|| DEFAULT_PROJECT_DIR.to_string());
    info!(project_dir = %project_dir, "using project directory");

    let registry = Registry::from_config(&cfg, &project_dir)?;

    if args.list {
        print_tasks(&registry);
        return Ok(0);
    }

    let mut executor = Executor::new(&registry, ProcessRunner::new())?;

    if args.dry_run {
        print_dry_run(&executor, &args.task)?;
        return Ok(0);
    }

    let report = executor.run(&args.task)?;
    if let RunOutcome::Failed { task, exit_code } = &report.outcome {
        eprintln!("taskgate: task '{task}' failed (exit status {exit_code})");
    }
    Ok(report.exit_code())
}

/// Process exit status for the result of [`run`].
pub fn exit_status(result: &Result<i32>) -> i32 {
    match result {
        Ok(code) => *code,
        Err(_) => CONFIG_ERROR_EXIT_CODE,
    }
}

fn load_config(explicit: Option<&str>) -> Result<ConfigFile> {
    match resolve_config_path(explicit)? {
        Some(path) => load_and_validate(&path),
        None => {
            info!("no task file found; using built-in quality gate");
            Ok(quality_gate())
        }
    }
}

fn print_tasks(registry: &Registry) {
    println!("tasks ({}):", registry.len());
    for task in registry.tasks() {
        println!("  - {}", task.name);
        if !task.prerequisites.is_empty() {
            println!("      after: {}", task.prerequisites.join(", "));
        }
        match &task.action {
            Some(action) => {
                println!("      cmd: {action}");
                if let Some(cwd) = &action.cwd {
                    println!("      cwd: {}", cwd.display());
                }
            }
            None => println!("      (composite)"),
        }
    }
}

/// Print the resolved order for `task` without running anything.
fn print_dry_run<R: exec::ActionRunner>(executor: &Executor<'_, R>, task: &str) -> Result<()> {
    let plan = executor.plan(task)?;
    println!("taskgate dry-run: {task}");
    for (i, t) in plan.iter().enumerate() {
        match &t.action {
            Some(action) => println!("  {}. {}: {}", i + 1, t.name, action),
            None => println!("  {}. {} (composite)", i + 1, t.name),
        }
    }
    Ok(())
}
