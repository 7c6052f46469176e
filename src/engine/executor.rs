// src/engine/executor.rs

use tracing::{debug, info, warn};

use crate::dag::{Registry, Task};
use crate::engine::resolve::resolve;
use crate::engine::run::{Run, RunOutcome, RunReport};
use crate::engine::TaskOutcome;
use crate::errors::Result;
use crate::exec::ActionRunner;

/// Runs a requested task and its prerequisites, one at a time, fail-fast.
///
/// Construction validates the whole registry (unknown references, cycles),
/// so structural errors surface before any action has run.
#[derive(Debug)]
pub struct Executor<'r, R> {
    registry: &'r Registry,
    runner: R,
}

impl<'r, R: ActionRunner> Executor<'r, R> {
    pub fn new(registry: &'r Registry, runner: R) -> Result<Self> {
        registry.validate()?;
        Ok(Self { registry, runner })
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Execution order for `name`, without running anything.
    pub fn plan(&self, name: &str) -> Result<Vec<&'r Task>> {
        resolve(self.registry, name)
    }

    /// Run `name` after its prerequisites.
    ///
    /// Configuration problems (unknown task, cycle) are returned as `Err`
    /// with no action executed. A failing action is not an error: it ends
    /// the run and is reported through [`RunOutcome::Failed`].
    pub fn run(&mut self, name: &str) -> Result<RunReport> {
        let plan = self.plan(name)?;
        debug!(
            task = %name,
            plan = ?plan.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            "resolved execution plan"
        );

        let mut run = Run::new(name);
        for task in plan {
            let fresh = run.begin(&task.name);
            debug_assert!(fresh, "task '{}' appears twice in the plan", task.name);

            let outcome = match &task.action {
                Some(action) => self.runner.run_action(&task.name, action),
                None => {
                    debug!(task = %task.name, "composite task; nothing to invoke");
                    TaskOutcome::Success
                }
            };

            if outcome.is_success() {
                run.mark_executed(&task.name);
                continue;
            }

            let exit_code = outcome.exit_code();
            warn!(
                task = %task.name,
                exit_code,
                requested = %name,
                "task failed; halting run"
            );
            run.mark_failed(&task.name);
            return Ok(run.into_report(RunOutcome::Failed {
                task: task.name.clone(),
                exit_code,
            }));
        }

        info!(task = %name, "run completed successfully");
        Ok(run.into_report(RunOutcome::Success))
    }
}
