//! Test utilities for flatdeps unit tests.
//!
//! Provides an in-memory [`HostProject`] and [`Configuration`] so that
//! variant discovery, configuration lookup and wiring can be tested without
//! a build model on disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use flatdeps::test_support::{FakeConfiguration, FakeProject};
//!
//! let project = FakeProject::unified(&["debug"])
//!     .with_configuration_object(
//!         FakeConfiguration::new("debugCompileClasspath")
//!             .declare("org.a:lib1:1.0")
//!             .module("org.a:lib1:1.0", &["org.a:lib2:1.5"]),
//!     );
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use fixtures::*;

use crate::core::{HostProject, ModuleCoordinate, Variant, VariantApi};
use crate::resolver::{Configuration, LenientResolution, Repository};

fn coord(s: &str) -> ModuleCoordinate {
    s.parse()
        .unwrap_or_else(|e| panic!("bad coordinate in test: {}", e))
}

/// In-memory configuration with its own repository.
#[derive(Debug, Clone)]
pub struct FakeConfiguration {
    name: String,
    declared: Vec<ModuleCoordinate>,
    repository: Repository,
}

impl FakeConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        FakeConfiguration {
            name: name.into(),
            declared: Vec::new(),
            repository: Repository::new(),
        }
    }

    /// Declare a first-level dependency.
    pub fn declare(mut self, coordinate: &str) -> Self {
        self.declared.push(coord(coordinate));
        self
    }

    /// Make a module resolvable, with its direct dependencies.
    pub fn module(mut self, coordinate: &str, deps: &[&str]) -> Self {
        self.repository
            .publish(coord(coordinate), deps.iter().map(|d| coord(d)).collect());
        self
    }
}

impl Configuration for FakeConfiguration {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve_leniently(&self) -> LenientResolution {
        self.repository.resolve_leniently(&self.declared)
    }
}

/// In-memory host project.
#[derive(Debug, Clone)]
pub struct FakeProject {
    api: Option<VariantApi>,
    unified: Vec<String>,
    application: Vec<String>,
    library: Vec<String>,
    configurations: HashMap<String, Arc<FakeConfiguration>>,
    build_dir: PathBuf,
}

impl FakeProject {
    fn with_api(api: Option<VariantApi>) -> Self {
        FakeProject {
            api,
            unified: Vec::new(),
            application: Vec::new(),
            library: Vec::new(),
            configurations: HashMap::new(),
            build_dir: PathBuf::from("build"),
        }
    }

    /// A project exposing the unified variant API.
    pub fn unified(variants: &[&str]) -> Self {
        let mut project = Self::with_api(Some(VariantApi::Unified));
        project.unified = variants.iter().map(|v| v.to_string()).collect();
        project
    }

    /// A project exposing only the legacy variant collections.
    pub fn legacy() -> Self {
        Self::with_api(Some(VariantApi::Legacy))
    }

    /// A project that is not variant-aware.
    pub fn without_variant_api() -> Self {
        Self::with_api(None)
    }

    pub fn with_application_variants(mut self, variants: &[&str]) -> Self {
        self.application = variants.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_library_variants(mut self, variants: &[&str]) -> Self {
        self.library = variants.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Add a configuration whose declared modules all resolve as leaves.
    pub fn with_configuration(self, name: &str, declared: &[&str]) -> Self {
        let config = declared
            .iter()
            .fold(FakeConfiguration::new(name), |config, c| {
                config.declare(c).module(c, &[])
            });
        self.with_configuration_object(config)
    }

    pub fn with_configuration_object(mut self, config: FakeConfiguration) -> Self {
        self.configurations
            .insert(config.name.clone(), Arc::new(config));
        self
    }

    pub fn with_build_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.build_dir = dir.as_ref().to_path_buf();
        self
    }
}

impl HostProject for FakeProject {
    fn variant_api(&self) -> Option<VariantApi> {
        self.api
    }

    fn on_variants(&self, callback: &mut dyn FnMut(Variant)) {
        for name in &self.unified {
            callback(Variant::new(name));
        }
    }

    fn application_variants(&self) -> Vec<Variant> {
        self.application.iter().map(Variant::new).collect()
    }

    fn library_variants(&self) -> Vec<Variant> {
        self.library.iter().map(Variant::new).collect()
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
