//! HostProject trait - the build system flatdeps plugs into.
//!
//! The host owns the project model, its variant API, its dependency
//! configurations and the resolution engine behind them. flatdeps only
//! queries it; task registration goes through a separate
//! [`TaskContainer`](crate::tasks::TaskContainer) so that variant callbacks
//! can register tasks while the project is borrowed.

use std::path::Path;
use std::sync::Arc;

use crate::core::variant::{Variant, VariantApi};
use crate::resolver::Configuration;

/// A project as exposed by the host build system.
pub trait HostProject {
    /// Probe which variant API shape the project exposes.
    ///
    /// `None` means the project is not variant-aware at all.
    fn variant_api(&self) -> Option<VariantApi>;

    /// Subscribe to the unified variant API.
    ///
    /// The callback is invoked once per variant, in whatever order the host
    /// configures them.
    fn on_variants(&self, callback: &mut dyn FnMut(Variant));

    /// The legacy application variant collection.
    fn application_variants(&self) -> Vec<Variant>;

    /// The legacy library variant collection.
    fn library_variants(&self) -> Vec<Variant>;

    /// Look up a dependency configuration by its exact name.
    fn find_configuration(&self, name: &str) -> Option<Arc<dyn Configuration>>;

    /// Base directory for build outputs.
    fn build_dir(&self) -> &Path;
}
