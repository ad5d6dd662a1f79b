//! High-level operations.
//!
//! Variant discovery, configuration lookup, flattening, manifest output and
//! the task wiring that ties them together.

pub mod configuration;
pub mod flat_deps;
pub mod flatten;
pub mod locate;
pub mod wire;
pub mod write;

pub use configuration::resolve_configuration;
pub use flat_deps::{flat_deps, wire_project, FlatDepsOptions, FlatDepsResult};
pub use flatten::{flatten, FlattenedManifest};
pub use locate::{collect_variants, locate, LegacyVariants, UnifiedVariants, VariantSource};
pub use wire::{manifest_path, wire, WireOptions, WireSummary, WiredVariant};
pub use write::write_manifest;
