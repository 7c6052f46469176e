// src/dag/registry.rs

use std::collections::HashMap;

use tracing::debug;

use crate::config::model::{ConfigFile, TaskConfig, PROJECT_DIR_PLACEHOLDER};
use crate::dag::cycles::find_cycle;
use crate::dag::task::{Action, Task, TaskName};
use crate::errors::{Result, TaskgateError};

/// Declared tasks keyed by name.
///
/// Populated once at startup and read-only afterwards. Iteration follows
/// registration order so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tasks: Vec<Task>,
    index: HashMap<TaskName, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a validated [`ConfigFile`].
    ///
    /// Every `{project_dir}` occurrence in `cmd` and `cwd` is replaced by
    /// `project_dir`. The result is validated before it is returned.
    pub fn from_config(cfg: &ConfigFile, project_dir: &str) -> Result<Self> {
        let mut registry = Self::new();

        for (name, tc) in cfg.task.iter() {
            let action = action_from_config(name, tc, project_dir)?;
            registry.insert(Task::new(name.clone(), tc.after.clone(), action))?;
        }

        registry.validate()?;
        Ok(registry)
    }

    /// Declare a task. Fails if `name` is taken.
    pub fn register(
        &mut self,
        name: impl Into<TaskName>,
        prerequisites: &[&str],
        action: Option<Action>,
    ) -> Result<()> {
        let prerequisites = prerequisites.iter().map(|s| s.to_string()).collect();
        self.insert(Task::new(name, prerequisites, action))
    }

    /// Declare an already-built [`Task`]. Fails if its name is taken.
    pub fn insert(&mut self, task: Task) -> Result<()> {
        if self.index.contains_key(&task.name) {
            return Err(TaskgateError::DuplicateTask(task.name));
        }
        debug!(task = %task.name, deps = ?task.prerequisites, "registering task");
        self.index.insert(task.name.clone(), self.tasks.len());
        self.tasks.push(task);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&Task> {
        self.get(name)
            .ok_or_else(|| TaskgateError::UnknownTask(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.index.get(name).map(|&i| &self.tasks[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All tasks in registration order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run every structural check. Must pass before anything executes.
    pub fn validate(&self) -> Result<()> {
        self.validate_references()?;
        self.validate_acyclic()
    }

    /// Every prerequisite must name a registered task.
    pub fn validate_references(&self) -> Result<()> {
        for task in &self.tasks {
            if let Some(missing) = task.prerequisites.iter().find(|dep| !self.contains(dep)) {
                return Err(TaskgateError::UnknownTask(missing.clone()));
            }
        }
        Ok(())
    }

    /// Full cycle check over all tasks, reachable from a request or not.
    pub fn validate_acyclic(&self) -> Result<()> {
        let nodes = self.tasks.iter().map(|t| t.name.as_str());
        let edges = self.tasks.iter().flat_map(|t| {
            t.prerequisites
                .iter()
                .map(move |dep| (t.name.as_str(), dep.as_str()))
        });

        match find_cycle(nodes, edges) {
            Some(members) => Err(TaskgateError::CyclicDependency(members)),
            None => Ok(()),
        }
    }
}

fn action_from_config(name: &str, tc: &TaskConfig, project_dir: &str) -> Result<Option<Action>> {
    let Some(cmd) = &tc.cmd else {
        return Ok(None);
    };
    let Some((program, args)) = cmd.split_first() else {
        return Err(TaskgateError::ConfigError(format!(
            "task '{}' has an empty `cmd`",
            name
        )));
    };

    let mut action = Action::new(
        substitute(program, project_dir),
        args.iter().map(|a| substitute(a, project_dir)),
    );
    if let Some(cwd) = &tc.cwd {
        action = action.with_cwd(substitute(cwd, project_dir));
    }
    Ok(Some(action))
}

fn substitute(value: &str, project_dir: &str) -> String {
    value.replace(PROJECT_DIR_PLACEHOLDER, project_dir)
}
