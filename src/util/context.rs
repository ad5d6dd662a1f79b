//! Global context for flatdeps operations.
//!
//! Provides centralized access to the working directory, the global
//! configuration home and build model discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::model::{find_model, ModelError};
use crate::util::config::{self, load_config, Config};

/// Environment variable overriding the global configuration home.
pub const HOME_ENV: &str = "FLATDEPS_HOME";

/// Global context containing paths and environment.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global flatdeps data (~/.flatdeps/)
    home: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a new GlobalContext from the process environment.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        let home = match std::env::var_os(HOME_ENV) {
            Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
            _ => config::global_config_dir(),
        };

        Ok(GlobalContext { cwd, home })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let mut ctx = Self::new()?;
        ctx.cwd = cwd;
        Ok(ctx)
    }

    /// Replace the global home directory.
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|h| h.join(config::CONFIG_FILE))
    }

    /// Get the configuration file path of a project.
    pub fn project_config_path(&self, project_root: &Path) -> PathBuf {
        config::project_config_path(project_root)
    }

    /// Load the merged configuration for a project.
    pub fn load_config(&self, project_root: &Path) -> Config {
        load_config(
            self.config_path().as_deref(),
            &self.project_config_path(project_root),
        )
    }

    /// Find the build model starting from cwd and searching upward.
    pub fn find_model(&self) -> Result<PathBuf, ModelError> {
        let mut current = self.cwd.clone();
        loop {
            match find_model(&current) {
                Ok(path) => return Ok(path),
                Err(ModelError::NotFound { .. }) => {
                    if !current.pop() {
                        return Err(ModelError::NotFound {
                            dir: self.cwd.clone(),
                        });
                    }
                }
            }
        }
    }
}
