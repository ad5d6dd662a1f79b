//! Project - the model-backed host project.
//!
//! A Project wraps a loaded [`BuildModel`] and exposes it through the
//! [`HostProject`] trait, including a repository-backed resolution engine
//! for each dependency configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::core::host::HostProject;
use crate::core::model::{BuildModel, DEFAULT_BUILD_DIR};
use crate::core::variant::{Variant, VariantApi};
use crate::core::ModuleCoordinate;
use crate::resolver::{Configuration, LenientResolution, Repository};

/// A dependency configuration resolved against the project's repository.
#[derive(Debug)]
pub struct ModelConfiguration {
    name: String,
    declared: Vec<ModuleCoordinate>,
    repository: Arc<Repository>,
}

impl Configuration for ModelConfiguration {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve_leniently(&self) -> LenientResolution {
        self.repository.resolve_leniently(&self.declared)
    }
}

/// A project loaded from a build model.
#[derive(Debug)]
pub struct Project {
    model: BuildModel,

    /// Directory containing the model file
    root: PathBuf,

    /// Build output directory
    build_dir: PathBuf,

    configurations: HashMap<String, Arc<ModelConfiguration>>,
}

impl Project {
    /// Load a project from a model file path.
    pub fn load(model_path: &Path) -> Result<Self> {
        let model = BuildModel::load(model_path)?;
        let root = model_path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Ok(Self::from_model(model, root))
    }

    /// Create a project from an already parsed model.
    pub fn from_model(model: BuildModel, root: PathBuf) -> Self {
        let build_dir = root.join(
            model
                .project
                .build_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR)),
        );

        let mut repository = Repository::new();
        for module in &model.modules {
            if repository.contains(&module.coordinate) {
                tracing::warn!(
                    "module {} is listed more than once, using the last entry",
                    module.coordinate
                );
            }
            repository.publish(module.coordinate.clone(), module.dependencies.clone());
        }
        let repository = Arc::new(repository);

        let configurations = model
            .configurations
            .iter()
            .map(|(name, section)| {
                let configuration = ModelConfiguration {
                    name: name.clone(),
                    declared: section.dependencies.clone(),
                    repository: Arc::clone(&repository),
                };
                (name.clone(), Arc::new(configuration))
            })
            .collect();

        Project {
            model,
            root,
            build_dir,
            configurations,
        }
    }

    /// Project name.
    pub fn name(&self) -> &str {
        &self.model.project.name
    }

    /// Directory containing the model file.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl HostProject for Project {
    fn variant_api(&self) -> Option<VariantApi> {
        self.model.variant_api()
    }

    fn on_variants(&self, callback: &mut dyn FnMut(Variant)) {
        if let Some(components) = &self.model.components {
            for name in &components.variants {
                callback(Variant::new(name));
            }
        }
    }

    fn application_variants(&self) -> Vec<Variant> {
        self.model
            .legacy
            .iter()
            .flat_map(|legacy| legacy.application_variants.iter().map(Variant::new))
            .collect()
    }

    fn library_variants(&self) -> Vec<Variant> {
        self.model
            .legacy
            .iter()
            .flat_map(|legacy| legacy.library_variants.iter().map(Variant::new))
            .collect()
    }

    fn find_configuration(&self, name: &str) -> Option<Arc<dyn Configuration>> {
        self.configurations
            .get(name)
            .map(|c| Arc::clone(c) as Arc<dyn Configuration>)
    }

    fn build_dir(&self) -> &Path {
        &self.build_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MODEL: &str = r#"
[project]
name = "app"
build_dir = "out"

[components]
variants = ["debug"]

[legacy]
application_variants = ["ignored"]

[configurations.debugCompileClasspath]
dependencies = ["org.a:lib1:1.0", "org.x:gone:0.1"]

[[modules]]
coordinate = "org.a:lib1:1.0"
dependencies = ["org.a:lib2:1.5"]

[[modules]]
coordinate = "org.a:lib2:1.5"
"#;

    #[test]
    fn test_load_project() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("BuildModel.toml");
        std::fs::write(&path, MODEL).unwrap();

        let project = Project::load(&path).unwrap();
        assert_eq!(project.name(), "app");
        assert_eq!(project.root(), tmp.path());
        assert_eq!(project.build_dir(), tmp.path().join("out"));
        assert!(project.find_configuration("debugCompileClasspath").is_some());
        assert!(project.find_configuration("debugCompile").is_none());
    }

    #[test]
    fn test_default_build_dir() {
        let model = BuildModel::parse("[project]\nname = \"app\"\n").unwrap();
        let project = Project::from_model(model, PathBuf::from("/work"));
        assert_eq!(project.build_dir(), Path::new("/work/build"));
    }

    #[test]
    fn test_variant_collections() {
        let project = Project::from_model(BuildModel::parse(MODEL).unwrap(), PathBuf::from("."));

        let mut seen = Vec::new();
        project.on_variants(&mut |v| seen.push(v));
        assert_eq!(seen, vec![Variant::new("debug")]);

        assert_eq!(project.application_variants(), vec![Variant::new("ignored")]);
        assert!(project.library_variants().is_empty());
    }

    #[test]
    fn test_configuration_resolves_against_repository() {
        let project = Project::from_model(BuildModel::parse(MODEL).unwrap(), PathBuf::from("."));

        let config = project.find_configuration("debugCompileClasspath").unwrap();
        assert_eq!(config.name(), "debugCompileClasspath");

        let resolution = config.resolve_leniently();
        assert_eq!(resolution.graph().all_module_dependencies().len(), 2);
        assert_eq!(resolution.failures().len(), 1);

        assert!(project.find_configuration("DebugCompileClasspath").is_none());
    }
}
