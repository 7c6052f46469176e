// src/dag/mod.rs

//! Task declarations and the registry holding them.
//!
//! - [`task`] defines [`Task`] and its external [`Action`].
//! - [`registry`] maps names to tasks and validates the dependency graph.
//! - [`cycles`] finds the members of a dependency cycle.

pub mod cycles;
pub mod registry;
pub mod task;

pub use registry::Registry;
pub use task::{Action, Task, TaskName};
