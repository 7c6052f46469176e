// src/exec/command.rs

use std::process::{Command, ExitStatus, Stdio};

use tracing::{error, info, warn};

use crate::dag::Action;
use crate::engine::TaskOutcome;
use crate::exec::backend::ActionRunner;

/// Runs actions as child processes, one at a time.
///
/// The child inherits stdin/stdout/stderr, so tool diagnostics reach the
/// user unmodified. Arguments are passed directly to the program; no shell
/// is involved.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ActionRunner for ProcessRunner {
    fn run_action(&mut self, task: &str, action: &Action) -> TaskOutcome {
        info!(task = %task, cmd = %action, "starting task process");

        let mut cmd = Command::new(&action.program);
        cmd.args(&action.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(cwd) = &action.cwd {
            cmd.current_dir(cwd);
        }

        let status = match cmd.status() {
            Ok(status) => status,
            Err(err) => {
                error!(
                    task = %task,
                    program = %action.program,
                    error = %err,
                    "failed to start task process"
                );
                return TaskOutcome::NotStarted(format!("{}: {err}", action.program));
            }
        };

        let outcome = outcome_from_status(status);
        match outcome {
            TaskOutcome::Success => info!(task = %task, "task process exited successfully"),
            _ => warn!(task = %task, exit_code = outcome.exit_code(), "task process failed"),
        }
        outcome
    }
}

fn outcome_from_status(status: ExitStatus) -> TaskOutcome {
    if status.success() {
        return TaskOutcome::Success;
    }
    match status.code() {
        Some(code) => TaskOutcome::Failed(code),
        None => TaskOutcome::Failed(signal_exit_code(status)),
    }
}

#[cfg(unix)]
fn signal_exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    // Shell convention: 128 + signal number.
    status.signal().map(|sig| 128 + sig).unwrap_or(1)
}

#[cfg(not(unix))]
fn signal_exit_code(_status: ExitStatus) -> i32 {
    1
}
