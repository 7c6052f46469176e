// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `ActionRunner` trait the executor talks to.
//! - [`command`] provides `ProcessRunner`, which runs actions as blocking
//!   child processes. Tests replace it with a fake runner.

pub mod backend;
pub mod command;

pub use backend::ActionRunner;
pub use command::ProcessRunner;
