//! Dependency resolution seam.
//!
//! flatdeps never resolves anything itself. A host exposes each dependency
//! configuration as a [`Configuration`], whose only capability is a lenient
//! resolution that cannot fail: whatever resolves ends up in the graph,
//! whatever does not is reported as an [`UnresolvedDependency`].

pub mod graph;
pub mod repository;

pub use graph::ResolvedGraph;
pub use repository::Repository;

use std::fmt;

use crate::core::ModuleCoordinate;

/// A named, resolvable bucket of declared dependencies.
///
/// Implementations must be shareable across threads: per-variant tasks may
/// resolve their configurations concurrently.
pub trait Configuration: Send + Sync {
    /// The configuration identifier, e.g. `debugCompileClasspath`.
    fn name(&self) -> &str;

    /// Resolve whatever can be resolved right now.
    fn resolve_leniently(&self) -> LenientResolution;
}

impl fmt::Debug for dyn Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("name", &self.name())
            .finish()
    }
}

/// Outcome of a lenient resolution.
#[derive(Debug, Clone, Default)]
pub struct LenientResolution {
    graph: ResolvedGraph,
    failures: Vec<UnresolvedDependency>,
}

impl LenientResolution {
    pub fn new(graph: ResolvedGraph, failures: Vec<UnresolvedDependency>) -> Self {
        LenientResolution { graph, failures }
    }

    /// The modules that did resolve.
    pub fn graph(&self) -> &ResolvedGraph {
        &self.graph
    }

    /// The dependencies that were tolerated as unresolvable.
    pub fn failures(&self) -> &[UnresolvedDependency] {
        &self.failures
    }

    /// True if nothing failed to resolve.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A dependency the resolution engine could not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedDependency {
    coordinate: ModuleCoordinate,
    required_by: Option<ModuleCoordinate>,
    reason: String,
}

impl UnresolvedDependency {
    pub fn new(
        coordinate: ModuleCoordinate,
        required_by: Option<ModuleCoordinate>,
        reason: impl Into<String>,
    ) -> Self {
        UnresolvedDependency {
            coordinate,
            required_by,
            reason: reason.into(),
        }
    }

    /// A module that no repository provides.
    pub fn not_found(coordinate: ModuleCoordinate, required_by: Option<ModuleCoordinate>) -> Self {
        Self::new(coordinate, required_by, "module not found")
    }

    pub fn coordinate(&self) -> &ModuleCoordinate {
        &self.coordinate
    }

    /// The module that declared this dependency, `None` if declared directly.
    pub fn required_by(&self) -> Option<&ModuleCoordinate> {
        self.required_by.as_ref()
    }
}

impl fmt::Display for UnresolvedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.required_by {
            Some(parent) => write!(f, "{} ({}, required by {})", self.coordinate, self.reason, parent),
            None => write!(f, "{} ({})", self.coordinate, self.reason),
        }
    }
}
