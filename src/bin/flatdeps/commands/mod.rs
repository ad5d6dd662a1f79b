//! Command implementations

pub mod completions;
pub mod run;
pub mod tasks;
pub mod variants;

use std::path::Path;

use anyhow::{anyhow, Result};

use flatdeps::core::{find_model, Project};
use flatdeps::ops::WireOptions;
use flatdeps::util::{Config, GlobalContext};

/// A loaded project together with its merged configuration.
pub struct Workspace {
    pub project: Project,
    pub config: Config,
}

impl Workspace {
    /// Load the project named by `--model`, or the nearest one above cwd.
    pub fn load(model: Option<&Path>) -> Result<Self> {
        let ctx = GlobalContext::new()?;

        let model_path = match model {
            Some(path) => {
                let path = ctx.cwd().join(path);
                if path.is_dir() {
                    find_model(&path)?
                } else {
                    path
                }
            }
            None => ctx.find_model().map_err(|e| {
                anyhow!(
                    "{}\nhelp: run flatdeps inside a project or pass --model <PATH>",
                    e
                )
            })?,
        };

        let project = Project::load(&model_path)?;
        let config = ctx.load_config(project.root());
        tracing::debug!(
            "loaded project `{}` from {}",
            project.name(),
            model_path.display()
        );

        Ok(Workspace { project, config })
    }

    pub fn wire_options(&self) -> WireOptions {
        WireOptions {
            logs_dir: self.config.logs_dir(),
        }
    }
}
