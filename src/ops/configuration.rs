//! Variant to dependency configuration lookup.

use std::sync::Arc;

use crate::core::naming::configuration_candidates;
use crate::core::{HostProject, Variant};
use crate::resolver::Configuration;

/// Find the compile-dependency configuration of a variant.
///
/// Tries `<variant>CompileClasspath`, then `<variant>Compile`. Returns
/// `None` when the project has neither; callers skip such variants.
pub fn resolve_configuration(
    project: &dyn HostProject,
    variant: &Variant,
) -> Option<Arc<dyn Configuration>> {
    configuration_candidates(variant.name())
        .iter()
        .find_map(|name| project.find_configuration(name))
}
