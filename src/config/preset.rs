// src/config/preset.rs

//! Built-in quality gate, used when no task file is found.
//!
//! Equivalent task file:
//!
//! ```toml
//! [task.test]
//! cmd = ["pytest", "--cov={project_dir}", "{project_dir}"]
//!
//! [task.codestyle]
//! cmd = ["pycodestyle", "{project_dir}"]
//!
//! [task.docstyle]
//! cmd = ["pydocstyle", "{project_dir}"]
//!
//! [task.lint]
//! cmd = ["pylint", "{project_dir}"]
//!
//! [task.check]
//! after = ["test", "codestyle", "docstyle", "lint"]
//! ```

use crate::config::model::{
    ConfigFile, ConfigSection, TaskConfig, TaskTable, PROJECT_DIR_PLACEHOLDER,
};

/// Name of the composite task aggregating every check.
pub const GATE_TASK: &str = "check";

/// Leaf checks in the order `check` runs them.
pub const GATE_CHECKS: [&str; 4] = ["test", "codestyle", "docstyle", "lint"];

pub fn quality_gate() -> ConfigFile {
    let mut task = TaskTable::new();

    task.insert(
        "test".to_string(),
        leaf(&[
            "pytest",
            &format!("--cov={PROJECT_DIR_PLACEHOLDER}"),
            PROJECT_DIR_PLACEHOLDER,
        ]),
    );
    task.insert(
        "codestyle".to_string(),
        leaf(&["pycodestyle", PROJECT_DIR_PLACEHOLDER]),
    );
    task.insert(
        "docstyle".to_string(),
        leaf(&["pydocstyle", PROJECT_DIR_PLACEHOLDER]),
    );
    task.insert("lint".to_string(), leaf(&["pylint", PROJECT_DIR_PLACEHOLDER]));
    task.insert(
        GATE_TASK.to_string(),
        TaskConfig {
            cmd: None,
            after: GATE_CHECKS.iter().map(|s| s.to_string()).collect(),
            cwd: None,
        },
    );

    ConfigFile::new_unchecked(ConfigSection::default(), task)
}

fn leaf(cmd: &[&str]) -> TaskConfig {
    TaskConfig {
        cmd: Some(cmd.iter().map(|s| s.to_string()).collect()),
        after: Vec::new(),
        cwd: None,
    }
}
