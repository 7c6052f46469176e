// src/config/validate.rs

use tracing::warn;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::dag::cycles::find_cycle;
use crate::errors::{Result, TaskgateError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = TaskgateError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.task))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_global_config(cfg)?;
    validate_commands(cfg)?;
    validate_task_dependencies(cfg)?;
    validate_dag(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &RawConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(TaskgateError::ConfigError(
            "task file must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if let Some(dir) = &cfg.config.project_dir {
        if dir.trim().is_empty() {
            return Err(TaskgateError::ConfigError(
                "[config].project_dir must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_commands(cfg: &RawConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        let Some(cmd) = &task.cmd else {
            continue;
        };
        match cmd.first() {
            None => {
                return Err(TaskgateError::ConfigError(format!(
                    "task '{}' has an empty `cmd`; omit it for a composite task",
                    name
                )));
            }
            Some(program) if program.trim().is_empty() => {
                return Err(TaskgateError::ConfigError(format!(
                    "task '{}' has an empty program name in `cmd`",
                    name
                )));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn validate_task_dependencies(cfg: &RawConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        for dep in task.after.iter() {
            if dep == name {
                return Err(TaskgateError::CyclicDependency(vec![name.clone()]));
            }
            if !cfg.task.contains_key(dep) {
                warn!(task = %name, dependency = %dep, "unknown dependency in `after`");
                return Err(TaskgateError::UnknownTask(dep.clone()));
            }
        }
    }
    Ok(())
}

fn validate_dag(cfg: &RawConfigFile) -> Result<()> {
    let edges = cfg.task.iter().flat_map(|(name, task)| {
        task.after
            .iter()
            .map(move |dep| (name.as_str(), dep.as_str()))
    });

    match find_cycle(cfg.task.keys().map(String::as_str), edges) {
        Some(members) => Err(TaskgateError::CyclicDependency(members)),
        None => Ok(()),
    }
}
