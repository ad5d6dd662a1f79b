//! BuildModel.toml parsing and schema.
//!
//! The build model is the snapshot a host build tool exports of one project:
//! its variant API, its dependency configurations and the modules its
//! resolution engine can resolve.
//!
//! ```toml
//! [project]
//! name = "app"
//! build_dir = "build"
//!
//! [components]
//! variants = ["debug", "release"]
//!
//! [configurations.debugCompileClasspath]
//! dependencies = ["org.a:lib1:1.0"]
//!
//! [[modules]]
//! coordinate = "org.a:lib1:1.0"
//! dependencies = ["org.a:lib2:1.5"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::variant::VariantApi;
use crate::core::ModuleCoordinate;

/// Build model file name.
pub const MODEL_FILE: &str = "BuildModel.toml";

/// Default build directory, relative to the project root.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Error locating a build model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("could not find {MODEL_FILE} in {} or any parent directory", dir.display())]
    NotFound { dir: PathBuf },
}

/// The parsed build model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildModel {
    pub project: ProjectSection,

    /// Unified variant API; its presence selects it
    #[serde(default)]
    pub components: Option<ComponentsSection>,

    /// Legacy application/library variant collections
    #[serde(default)]
    pub legacy: Option<LegacySection>,

    /// Dependency configurations by name
    #[serde(default)]
    pub configurations: BTreeMap<String, ConfigurationSection>,

    /// Modules the resolution engine can resolve
    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
}

/// The `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,

    /// Build output directory, relative to the model file
    #[serde(default)]
    pub build_dir: Option<PathBuf>,
}

/// The `[components]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentsSection {
    #[serde(default)]
    pub variants: Vec<String>,
}

/// The `[legacy]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacySection {
    #[serde(default)]
    pub application_variants: Vec<String>,

    #[serde(default)]
    pub library_variants: Vec<String>,
}

/// A `[configurations.<name>]` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigurationSection {
    #[serde(default)]
    pub dependencies: Vec<ModuleCoordinate>,
}

/// A `[[modules]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub coordinate: ModuleCoordinate,

    #[serde(default)]
    pub dependencies: Vec<ModuleCoordinate>,
}

impl BuildModel {
    /// Load a build model from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read build model: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse build model: {}", path.display()))
    }

    /// Parse a build model from a string.
    pub fn parse(contents: &str) -> Result<Self> {
        let model: BuildModel = toml::from_str(contents)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.project.name.trim().is_empty() {
            bail!("project name cannot be empty");
        }

        let mut names: Vec<&String> = Vec::new();
        if let Some(components) = &self.components {
            names.extend(&components.variants);
        }
        if let Some(legacy) = &self.legacy {
            names.extend(&legacy.application_variants);
            names.extend(&legacy.library_variants);
        }
        if names.iter().any(|n| n.trim().is_empty()) {
            bail!("variant names cannot be empty");
        }

        Ok(())
    }

    /// Which variant API the model exposes. Unified wins over legacy.
    pub fn variant_api(&self) -> Option<VariantApi> {
        if self.components.is_some() {
            Some(VariantApi::Unified)
        } else if self.legacy.is_some() {
            Some(VariantApi::Legacy)
        } else {
            None
        }
    }
}

/// Find the build model in a directory.
pub fn find_model(dir: &Path) -> Result<PathBuf, ModelError> {
    let path = dir.join(MODEL_FILE);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ModelError::NotFound {
            dir: dir.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_unified_model() {
        let model = BuildModel::parse(
            r#"
[project]
name = "app"

[components]
variants = ["debug", "release"]

[configurations.debugCompileClasspath]
dependencies = ["org.a:lib1:1.0"]

[[modules]]
coordinate = "org.a:lib1:1.0"
dependencies = ["org.a:lib2:1.5"]
"#,
        )
        .unwrap();

        assert_eq!(model.project.name, "app");
        assert_eq!(model.variant_api(), Some(VariantApi::Unified));
        assert_eq!(
            model.components.as_ref().unwrap().variants,
            vec!["debug", "release"]
        );
        assert_eq!(
            model.configurations["debugCompileClasspath"].dependencies,
            vec![ModuleCoordinate::new("org.a", "lib1", "1.0")]
        );
        assert_eq!(model.modules.len(), 1);
    }

    #[test]
    fn test_unified_api_wins_over_legacy() {
        let model = BuildModel::parse(
            r#"
[project]
name = "app"

[components]

[legacy]
application_variants = ["debug"]
"#,
        )
        .unwrap();

        assert_eq!(model.variant_api(), Some(VariantApi::Unified));
    }

    #[test]
    fn test_legacy_and_absent_api() {
        let legacy = BuildModel::parse(
            "[project]\nname = \"lib\"\n\n[legacy]\nlibrary_variants = [\"debug\"]\n",
        )
        .unwrap();
        assert_eq!(legacy.variant_api(), Some(VariantApi::Legacy));

        let plain = BuildModel::parse("[project]\nname = \"tool\"\n").unwrap();
        assert_eq!(plain.variant_api(), None);
    }

    #[test]
    fn test_malformed_coordinate_is_rejected() {
        let result = BuildModel::parse(
            r#"
[project]
name = "app"

[configurations.debugCompileClasspath]
dependencies = ["org.a:lib1"]
"#,
        );

        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("org.a:lib1"));
    }

    #[test]
    fn test_empty_variant_name_is_rejected() {
        let result =
            BuildModel::parse("[project]\nname = \"app\"\n\n[components]\nvariants = [\"\"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_model() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            find_model(tmp.path()),
            Err(ModelError::NotFound { .. })
        ));

        let path = tmp.path().join(MODEL_FILE);
        std::fs::write(&path, "[project]\nname = \"app\"\n").unwrap();
        assert_eq!(find_model(tmp.path()).unwrap(), path);
    }
}
