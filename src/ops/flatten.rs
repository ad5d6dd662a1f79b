//! Dependency flattening.
//!
//! Reduces a resolved dependency graph to a deduplicated list of module
//! coordinates in canonical `(group, name, version)` order. The order is what
//! keeps manifests diffable across runs and machines; resolution traversal
//! order never leaks into it.

use std::collections::BTreeSet;
use std::fmt;

use crate::core::ModuleCoordinate;
use crate::resolver::{Configuration, LenientResolution};

/// A sorted list of unique module coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedManifest {
    coordinates: Vec<ModuleCoordinate>,
}

impl FlattenedManifest {
    /// Flatten any collection of coordinates.
    pub fn from_coordinates<I>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = ModuleCoordinate>,
    {
        let unique: BTreeSet<ModuleCoordinate> = coordinates.into_iter().collect();
        FlattenedManifest {
            coordinates: unique.into_iter().collect(),
        }
    }

    /// Flatten everything a lenient resolution resolved, at every depth.
    pub fn from_resolution(resolution: &LenientResolution) -> Self {
        Self::from_coordinates(
            resolution
                .graph()
                .all_module_dependencies()
                .into_iter()
                .cloned(),
        )
    }

    /// Coordinates in manifest order.
    pub fn coordinates(&self) -> &[ModuleCoordinate] {
        &self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Render the manifest text: one `group:name:version` line per entry.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FlattenedManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coord in &self.coordinates {
            writeln!(f, "{}", coord)?;
        }
        Ok(())
    }
}

/// Leniently resolve a configuration and flatten the result.
///
/// Unresolvable dependencies are left out of the manifest.
pub fn flatten(configuration: &dyn Configuration) -> FlattenedManifest {
    let resolution = configuration.resolve_leniently();

    if !resolution.is_complete() {
        tracing::debug!(
            "{}: {} unresolved dependencies omitted",
            configuration.name(),
            resolution.failures().len()
        );
        for failure in resolution.failures() {
            tracing::trace!("{}: unresolved {}", configuration.name(), failure);
        }
    }

    FlattenedManifest::from_resolution(&resolution)
}
