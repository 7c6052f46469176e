// src/exec/backend.rs

//! Pluggable action runner abstraction.
//!
//! The executor hands each task's [`Action`] to an `ActionRunner` instead of
//! spawning processes itself. Production code uses
//! [`ProcessRunner`](super::command::ProcessRunner); tests provide a runner
//! that records invocations and returns scripted outcomes.

use crate::dag::Action;
use crate::engine::TaskOutcome;

/// Runs one action to completion and reports how it ended.
///
/// Implementations must block until the action has terminated. Failures to
/// start are reported as [`TaskOutcome::NotStarted`], never as a panic.
pub trait ActionRunner {
    fn run_action(&mut self, task: &str, action: &Action) -> TaskOutcome;
}

impl<R: ActionRunner + ?Sized> ActionRunner for &mut R {
    fn run_action(&mut self, task: &str, action: &Action) -> TaskOutcome {
        (**self).run_action(task, action)
    }
}
