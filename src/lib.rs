//! flatdeps - flattened compile-dependency manifests per build variant
//!
//! This crate discovers the build variants of a project, finds each variant's
//! compile-dependency configuration, resolves it leniently and writes the
//! sorted, deduplicated set of every module it pulls in to one manifest file
//! per variant. The work is registered as deferred tasks and run by a small
//! parallel task scheduler.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod tasks;
pub mod util;

/// Test utilities for flatdeps unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides an in-memory host project and configuration,
/// plus build model fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    coordinate::ModuleCoordinate, host::HostProject, project::Project, variant::Variant,
    variant::VariantApi,
};

pub use crate::ops::{flat_deps, FlatDepsOptions, FlattenedManifest};
pub use crate::resolver::Configuration;
pub use crate::util::context::GlobalContext;
