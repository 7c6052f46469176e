// src/engine/run.rs

//! Per-run state and the report handed back to the caller.

use std::collections::HashMap;

use tracing::warn;

use crate::engine::TaskName;

/// State of a task within one run. Absent from the run means unvisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Picked up by the run; its action has not finished yet.
    InProgress,
    /// Finished successfully (composite tasks included). Terminal.
    Executed,
    /// Its action failed and the run halted. Terminal.
    Failed,
}

impl TaskState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskState::Executed | TaskState::Failed)
    }
}

/// Final result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    /// First failing task and the exit status it produced.
    Failed { task: TaskName, exit_code: i32 },
}

/// What a finished run reports to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub requested: TaskName,
    /// Tasks that reached `Executed`, in order.
    pub executed: Vec<TaskName>,
    pub outcome: RunOutcome,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.outcome == RunOutcome::Success
    }

    /// Exit status for the whole process: 0, or the failing task's status.
    pub fn exit_code(&self) -> i32 {
        match &self.outcome {
            RunOutcome::Success => 0,
            RunOutcome::Failed { exit_code, .. } => *exit_code,
        }
    }

    pub fn failed_task(&self) -> Option<&str> {
        match &self.outcome {
            RunOutcome::Success => None,
            RunOutcome::Failed { task, .. } => Some(task),
        }
    }
}

/// Bookkeeping for a single invocation of the executor.
///
/// Owned by that invocation only and consumed into a [`RunReport`].
#[derive(Debug)]
pub struct Run {
    requested: TaskName,
    states: HashMap<TaskName, TaskState>,
    executed: Vec<TaskName>,
}

impl Run {
    pub fn new(requested: impl Into<TaskName>) -> Self {
        Self {
            requested: requested.into(),
            states: HashMap::new(),
            executed: Vec::new(),
        }
    }

    pub fn requested(&self) -> &str {
        &self.requested
    }

    pub fn state_of(&self, task: &str) -> Option<TaskState> {
        self.states.get(task).copied()
    }

    pub fn has_executed(&self, task: &str) -> bool {
        self.state_of(task) == Some(TaskState::Executed)
    }

    /// `Unvisited -> InProgress`. Returns `false` if the task was already visited.
    pub fn begin(&mut self, task: &str) -> bool {
        if self.states.contains_key(task) {
            return false;
        }
        self.states.insert(task.to_string(), TaskState::InProgress);
        true
    }

    /// `InProgress -> Executed`.
    pub fn mark_executed(&mut self, task: &str) {
        if self.transition(task, TaskState::Executed) {
            self.executed.push(task.to_string());
        }
    }

    /// `InProgress -> Failed`.
    pub fn mark_failed(&mut self, task: &str) {
        self.transition(task, TaskState::Failed);
    }

    fn transition(&mut self, task: &str, to: TaskState) -> bool {
        match self.states.get_mut(task) {
            Some(state) if *state == TaskState::InProgress => {
                *state = to;
                true
            }
            other => {
                warn!(task = %task, from = ?other, to = ?to, "ignoring invalid task state transition");
                false
            }
        }
    }

    pub fn into_report(self, outcome: RunOutcome) -> RunReport {
        RunReport {
            requested: self.requested,
            executed: self.executed,
            outcome,
        }
    }
}
