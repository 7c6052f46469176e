#![allow(dead_code)]

use taskgate::config::{ConfigFile, ConfigSection, RawConfigFile, TaskConfig, TaskTable};
use taskgate::dag::{Action, Registry};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                task: TaskTable::new(),
            },
        }
    }

    pub fn with_task(mut self, name: &str, task: TaskConfig) -> Self {
        self.config.task.insert(name.to_string(), task);
        self
    }

    pub fn with_project_dir(mut self, dir: &str) -> Self {
        self.config.config.project_dir = Some(dir.to_string());
        self
    }

    /// The unvalidated file, for tests that expect validation to fail.
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(cmd: &[&str]) -> Self {
        Self {
            task: TaskConfig {
                cmd: Some(cmd.iter().map(|s| s.to_string()).collect()),
                after: vec![],
                cwd: None,
            },
        }
    }

    /// A task with no command of its own.
    pub fn composite() -> Self {
        Self {
            task: TaskConfig::default(),
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.after.push(dep.to_string());
        self
    }

    pub fn cwd(mut self, dir: &str) -> Self {
        self.task.cwd = Some(dir.to_string());
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

/// Stub action that names its task; never meant to be spawned.
pub fn stub(task: &str) -> Action {
    Action::new(format!("stub-{task}"), Vec::<String>::new())
}

/// Registry for the `check` gate, with stub actions:
/// `test`, `codestyle`, `docstyle`, `lint`, and `check` after all four.
pub fn gate_registry() -> Registry {
    let mut registry = Registry::new();
    for name in ["test", "codestyle", "docstyle", "lint"] {
        registry
            .register(name, &[], Some(stub(name)))
            .expect("leaf registration");
    }
    registry
        .register("check", &["test", "codestyle", "docstyle", "lint"], None)
        .expect("check registration");
    registry
}

/// Linear chain `t0 <- t1 <- ... <- t{len-1}`, each with a stub action.
pub fn chain_registry(len: usize) -> Registry {
    let mut registry = Registry::new();
    for i in 0..len {
        let prev = i.checked_sub(1).map(|p| format!("t{p}"));
        let after: Vec<&str> = prev.as_deref().into_iter().collect();
        let name = format!("t{i}");
        registry
            .register(name.clone(), &after, Some(stub(&name)))
            .expect("chain registration");
    }
    registry
}
