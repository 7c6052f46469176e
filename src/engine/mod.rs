// src/engine/mod.rs

//! Execution engine for taskgate.
//!
//! This module ties together:
//! - dependency resolution of a requested task into a linear plan
//! - per-run bookkeeping (which task ran, which failed)
//! - the executor that invokes actions in plan order, fail-fast
//!
//! Resolution lives in [`resolve`] and is pure; [`executor`] drives an
//! [`ActionRunner`](crate::exec::ActionRunner) over the plan and records the
//! result in a [`run::Run`].

pub use crate::dag::TaskName;

/// Exit status used when a task's program could not be started at all.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 127;

/// How a single action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    /// The process ran and exited non-zero (or was killed).
    Failed(i32),
    /// The program could not be started (not found, not executable, ...).
    NotStarted(String),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success)
    }

    /// Process exit status this outcome maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskOutcome::Success => 0,
            TaskOutcome::Failed(code) => *code,
            TaskOutcome::NotStarted(_) => LAUNCH_FAILURE_EXIT_CODE,
        }
    }
}

pub mod executor;
pub mod resolve;
pub mod run;

pub use executor::Executor;
pub use resolve::resolve;
pub use run::{Run, RunOutcome, RunReport, TaskState};
