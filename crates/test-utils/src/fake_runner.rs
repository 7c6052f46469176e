use std::collections::HashMap;

use taskgate::dag::Action;
use taskgate::engine::TaskOutcome;
use taskgate::exec::ActionRunner;

/// A fake runner that:
/// - records which tasks were invoked, in order
/// - returns a scripted outcome per task (success unless told otherwise)
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    outcomes: HashMap<String, TaskOutcome>,
    invoked: Vec<String>,
    actions: Vec<Action>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `task` exit with `code`.
    pub fn exit_with(mut self, task: &str, code: i32) -> Self {
        let outcome = if code == 0 {
            TaskOutcome::Success
        } else {
            TaskOutcome::Failed(code)
        };
        self.outcomes.insert(task.to_string(), outcome);
        self
    }

    /// Make `task` behave as if its program could not be found.
    pub fn not_started(mut self, task: &str) -> Self {
        self.outcomes.insert(
            task.to_string(),
            TaskOutcome::NotStarted(format!("{task}: program not found")),
        );
        self
    }

    /// Task names in invocation order.
    pub fn invoked(&self) -> &[String] {
        &self.invoked
    }

    /// Actions in invocation order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn times_invoked(&self, task: &str) -> usize {
        self.invoked.iter().filter(|t| *t == task).count()
    }
}

impl ActionRunner for FakeRunner {
    fn run_action(&mut self, task: &str, action: &Action) -> TaskOutcome {
        self.invoked.push(task.to_string());
        self.actions.push(action.clone());
        self.outcomes
            .get(task)
            .cloned()
            .unwrap_or(TaskOutcome::Success)
    }
}
