//! Test fixtures for build models.
//!
//! This module provides a builder for `BuildModel.toml` content and a few
//! ready-made models for common scenarios.

use std::path::{Path, PathBuf};

use crate::core::MODEL_FILE;

/// Fixture for a build model on disk.
#[derive(Debug, Clone)]
pub struct ModelFixture {
    /// Project name.
    pub name: String,
    /// Unified variants, `None` if the section is absent.
    pub components: Option<Vec<String>>,
    /// Legacy `(application, library)` variants, `None` if absent.
    pub legacy: Option<(Vec<String>, Vec<String>)>,
    /// Configurations with their declared coordinates.
    pub configurations: Vec<(String, Vec<String>)>,
    /// Resolvable modules with their direct dependencies.
    pub modules: Vec<(String, Vec<String>)>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn toml_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("\"{}\"", s)).collect();
    format!("[{}]", quoted.join(", "))
}

impl ModelFixture {
    /// A model with no variant API.
    pub fn new(name: impl Into<String>) -> Self {
        ModelFixture {
            name: name.into(),
            components: None,
            legacy: None,
            configurations: Vec::new(),
            modules: Vec::new(),
        }
    }

    /// A model exposing the unified variant API.
    pub fn unified(name: impl Into<String>, variants: &[&str]) -> Self {
        let mut fixture = Self::new(name);
        fixture.components = Some(strings(variants));
        fixture
    }

    /// A model exposing the legacy variant collections.
    pub fn legacy(name: impl Into<String>, application: &[&str], library: &[&str]) -> Self {
        let mut fixture = Self::new(name);
        fixture.legacy = Some((strings(application), strings(library)));
        fixture
    }

    /// Add a configuration.
    pub fn with_configuration(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.configurations
            .push((name.to_string(), strings(dependencies)));
        self
    }

    /// Add a resolvable module.
    pub fn with_module(mut self, coordinate: &str, dependencies: &[&str]) -> Self {
        self.modules
            .push((coordinate.to_string(), strings(dependencies)));
        self
    }

    /// Render the model as TOML.
    pub fn render(&self) -> String {
        let mut out = format!("[project]\nname = \"{}\"\n", self.name);

        if let Some(variants) = &self.components {
            out.push_str(&format!("\n[components]\nvariants = {}\n", toml_list(variants)));
        }

        if let Some((application, library)) = &self.legacy {
            out.push_str(&format!(
                "\n[legacy]\napplication_variants = {}\nlibrary_variants = {}\n",
                toml_list(application),
                toml_list(library)
            ));
        }

        for (name, deps) in &self.configurations {
            out.push_str(&format!(
                "\n[configurations.{}]\ndependencies = {}\n",
                name,
                toml_list(deps)
            ));
        }

        for (coordinate, deps) in &self.modules {
            out.push_str(&format!(
                "\n[[modules]]\ncoordinate = \"{}\"\ndependencies = {}\n",
                coordinate,
                toml_list(deps)
            ));
        }

        out
    }

    /// Write the model into `dir`, returning the model path.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(MODEL_FILE);
        std::fs::write(&path, self.render())?;
        Ok(path)
    }
}

/// Ready-made models.
pub mod models {
    use super::ModelFixture;

    /// Two variants with a transitive chain on `debug` and nothing on `release`.
    pub fn app() -> ModelFixture {
        ModelFixture::unified("app", &["debug", "release"])
            .with_configuration("debugCompileClasspath", &["org.b:lib2:2.0", "org.a:lib1:1.0"])
            .with_configuration("releaseCompileClasspath", &[])
            .with_module("org.a:lib1:1.0", &[])
            .with_module("org.b:lib2:2.0", &["org.a:lib2:1.5"])
            .with_module("org.a:lib2:1.5", &["org.a:lib1:1.0"])
    }

    /// A legacy library project using `<variant>Compile` configurations.
    pub fn legacy_lib() -> ModelFixture {
        ModelFixture::legacy("lib", &[], &["debug"])
            .with_configuration("debugCompile", &["org.a:lib1:1.0"])
            .with_module("org.a:lib1:1.0", &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuildModel, VariantApi};

    #[test]
    fn test_rendered_models_parse() {
        let app = BuildModel::parse(&models::app().render()).unwrap();
        assert_eq!(app.variant_api(), Some(VariantApi::Unified));
        assert_eq!(app.modules.len(), 3);

        let lib = BuildModel::parse(&models::legacy_lib().render()).unwrap();
        assert_eq!(lib.variant_api(), Some(VariantApi::Legacy));

        let plain = BuildModel::parse(&ModelFixture::new("tool").render()).unwrap();
        assert_eq!(plain.variant_api(), None);
    }
}
