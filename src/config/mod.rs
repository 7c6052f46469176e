// src/config/mod.rs

//! Task file loading and validation for taskgate.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a task file from disk (`loader.rs`).
//! - Validate basic invariants like DAG correctness (`validate.rs`).
//! - Provide the built-in quality gate used without a task file (`preset.rs`).

pub mod loader;
pub mod model;
pub mod preset;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_str, resolve_config_path};
pub use model::{ConfigFile, ConfigSection, RawConfigFile, TaskConfig, TaskTable};
pub use preset::quality_gate;
