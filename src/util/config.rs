//! Configuration file support for flatdeps.
//!
//! flatdeps supports two configuration file locations:
//! - Global: `~/.flatdeps/config.toml` - User-wide defaults
//! - Project: `.flatdeps/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::naming::DEFAULT_LOGS_DIR;

/// Directory holding flatdeps configuration, both global and per project.
pub const CONFIG_DIR: &str = ".flatdeps";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// flatdeps configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest output settings
    pub output: OutputConfig,

    /// Task scheduling settings
    pub tasks: TasksConfig,
}

/// Manifest output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Manifest directory relative to the build directory
    pub logs_dir: Option<PathBuf>,
}

/// Task scheduling configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    /// Number of tasks run in parallel (None = auto-detect)
    pub jobs: Option<usize>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tasks.jobs == Some(0) {
            bail!("tasks.jobs must be at least 1");
        }
        if let Some(dir) = &self.output.logs_dir {
            if dir.is_absolute() {
                bail!("output.logs_dir must be relative to the build directory");
            }
        }
        Ok(())
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.output.logs_dir.is_some() {
            self.output.logs_dir = other.output.logs_dir;
        }
        if other.tasks.jobs.is_some() {
            self.tasks.jobs = other.tasks.jobs;
        }
    }

    /// Manifest directory, falling back to `outputs/logs`.
    pub fn logs_dir(&self) -> PathBuf {
        self.output
            .logs_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGS_DIR))
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.flatdeps/config.toml)
/// 2. Global config (~/.flatdeps/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global flatdeps config directory (~/.flatdeps).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR))
}

/// Get the project config path (.flatdeps/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}
