// src/config/model.rs

use linked_hash_map::LinkedHashMap;
use serde::Deserialize;

/// Placeholder replaced by the project directory in `cmd` and `cwd`.
pub const PROJECT_DIR_PLACEHOLDER: &str = "{project_dir}";

/// Tasks keyed by name, in the order the file declares them.
pub type TaskTable = LinkedHashMap<String, TaskConfig>;

/// Task file exactly as deserialized from TOML, before semantic validation.
///
/// ```toml
/// [config]
/// project_dir = "pydcm2niix"
///
/// [task.test]
/// cmd = ["pytest", "--cov={project_dir}", "{project_dir}"]
///
/// [task.check]
/// after = ["test"]
/// ```
///
/// Convert into a [`ConfigFile`] with `ConfigFile::try_from`, which runs the
/// checks in `config::validate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// Global settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[task.<name>]`, in declaration order.
    #[serde(default)]
    pub task: TaskTable,
}

/// A validated task file.
///
/// Only obtainable through `TryFrom<RawConfigFile>`, so holders can rely on
/// every `after` reference being known and the graph being acyclic.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub task: TaskTable,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, task: TaskTable) -> Self {
        Self { config, task }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// Project source tree handed to the task commands.
    ///
    /// The `--project-dir` flag takes precedence; `"."` is used when neither
    /// is given.
    #[serde(default)]
    pub project_dir: Option<String>,
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    /// Program followed by its arguments.
    ///
    /// A task without `cmd` is a composite: it only aggregates `after`.
    #[serde(default)]
    pub cmd: Option<Vec<String>>,

    /// Prerequisites, run left to right before this task.
    #[serde(default)]
    pub after: Vec<String>,

    /// Working directory for the command, relative to where taskgate runs.
    #[serde(default)]
    pub cwd: Option<String>,
}

impl TaskConfig {
    pub fn is_composite(&self) -> bool {
        self.cmd.is_none()
    }
}
