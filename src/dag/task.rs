// src/dag/task.rs

//! Task declarations: a name, ordered prerequisites and an optional action.

use std::fmt;
use std::path::PathBuf;

pub type TaskName = String;

/// External command invoked when a task runs.
///
/// Everything the command needs (including the project directory) is baked
/// in at construction; nothing is read from the environment at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` inherits the caller's.
    pub cwd: Option<PathBuf>,
}

impl Action {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// A declared task. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: TaskName,
    /// Run left to right before this task's own action.
    pub prerequisites: Vec<TaskName>,
    /// `None` for a composite task that only aggregates prerequisites.
    pub action: Option<Action>,
}

impl Task {
    pub fn new(name: impl Into<TaskName>, prerequisites: Vec<TaskName>, action: Option<Action>) -> Self {
        Self {
            name: name.into(),
            prerequisites,
            action,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.action.is_none()
    }
}
