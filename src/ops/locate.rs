//! Variant discovery.
//!
//! A host exposes its variants through one of two API shapes. Each shape is
//! a [`VariantSource`] strategy; [`locate`] probes the project once and picks
//! the matching strategy so that callers only ever see [`Variant`] values.

use crate::core::{HostProject, Variant, VariantApi};

/// A strategy for enumerating a project's variants.
pub trait VariantSource {
    /// The API shape this source reads.
    fn api(&self) -> VariantApi;

    /// Deliver every variant to `f`, in no particular order.
    fn for_each_variant(&self, project: &dyn HostProject, f: &mut dyn FnMut(Variant));
}

/// Variants delivered by the unified variant API callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnifiedVariants;

impl VariantSource for UnifiedVariants {
    fn api(&self) -> VariantApi {
        VariantApi::Unified
    }

    fn for_each_variant(&self, project: &dyn HostProject, f: &mut dyn FnMut(Variant)) {
        project.on_variants(f);
    }
}

/// Variants from the legacy application and library collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyVariants;

impl VariantSource for LegacyVariants {
    fn api(&self) -> VariantApi {
        VariantApi::Legacy
    }

    fn for_each_variant(&self, project: &dyn HostProject, f: &mut dyn FnMut(Variant)) {
        // At most one of these is non-empty in practice
        for variant in project.application_variants() {
            f(variant);
        }
        for variant in project.library_variants() {
            f(variant);
        }
    }
}

/// Pick the variant source matching the project's API shape.
///
/// Returns `None` when the project is not variant-aware.
pub fn locate(project: &dyn HostProject) -> Option<Box<dyn VariantSource>> {
    match project.variant_api()? {
        VariantApi::Unified => Some(Box::new(UnifiedVariants)),
        VariantApi::Legacy => Some(Box::new(LegacyVariants)),
    }
}

/// Collect every variant of a project. Empty if it is not variant-aware.
pub fn collect_variants(project: &dyn HostProject) -> Vec<Variant> {
    let mut variants = Vec::new();
    if let Some(source) = locate(project) {
        source.for_each_variant(project, &mut |v| variants.push(v));
    }
    variants
}
