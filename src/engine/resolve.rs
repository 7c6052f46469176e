// src/engine/resolve.rs

//! Depth-first resolution of a task into its execution order.

use std::collections::HashSet;

use tracing::debug;

use crate::dag::{Registry, Task};
use crate::errors::{Result, TaskgateError};

/// Resolve `name` into the order its tasks must run in.
///
/// Prerequisites come before the task that declares them, siblings keep
/// their declared left-to-right order, and a task shared by several
/// dependents appears once, at its first position. Nothing is executed.
///
/// Fails with `UnknownTask` for an undeclared name anywhere on the way and
/// with `CyclicDependency` if a task is reached again while it is still
/// being resolved.
///
/// The walk keeps its own stack, so chain depth is bounded by memory rather
/// than by the thread's call stack.
pub fn resolve<'r>(registry: &'r Registry, name: &str) -> Result<Vec<&'r Task>> {
    let root = registry.lookup(name)?;

    let mut visited: HashSet<&'r str> = HashSet::new();
    let mut in_progress: HashSet<&'r str> = HashSet::new();
    let mut stack: Vec<Frame<'r>> = Vec::new();
    let mut order: Vec<&'r Task> = Vec::new();

    in_progress.insert(&root.name);
    stack.push(Frame::new(root));

    while let Some(frame) = stack.last_mut() {
        let task = frame.task;
        let Some(dep) = task.prerequisites.get(frame.next) else {
            stack.pop();
            in_progress.remove(task.name.as_str());
            visited.insert(&task.name);
            debug!(task = %task.name, position = order.len(), "resolved");
            order.push(task);
            continue;
        };
        frame.next += 1;

        if visited.contains(dep.as_str()) {
            debug!(task = %dep, "already resolved; skipping");
            continue;
        }
        if in_progress.contains(dep.as_str()) {
            return Err(cycle_through(&stack, dep));
        }

        let prerequisite = registry.lookup(dep)?;
        in_progress.insert(&prerequisite.name);
        stack.push(Frame::new(prerequisite));
    }

    Ok(order)
}

/// A task whose prerequisites are being walked, and the next one to visit.
struct Frame<'r> {
    task: &'r Task,
    next: usize,
}

impl<'r> Frame<'r> {
    fn new(task: &'r Task) -> Self {
        Self { task, next: 0 }
    }
}

/// The tasks on the stack from `dep` upwards form the cycle.
fn cycle_through(stack: &[Frame<'_>], dep: &str) -> TaskgateError {
    let start = stack
        .iter()
        .position(|frame| frame.task.name == dep)
        .unwrap_or(0);
    let mut members: Vec<String> = stack[start..]
        .iter()
        .map(|frame| frame.task.name.clone())
        .collect();
    members.sort();
    TaskgateError::CyclicDependency(members)
}
