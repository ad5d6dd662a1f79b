//! Core data structures for flatdeps.
//!
//! This module contains the foundational types used throughout flatdeps:
//! - Module coordinates and variants
//! - Naming conventions shared by configurations, tasks and manifest files
//! - The host project seam and its build-model-backed implementation

pub mod coordinate;
pub mod host;
pub mod model;
pub mod naming;
pub mod project;
pub mod variant;

pub use coordinate::{CoordinateError, ModuleCoordinate};
pub use host::HostProject;
pub use model::{find_model, BuildModel, ModelError, MODEL_FILE};
pub use project::Project;
pub use variant::{Variant, VariantApi};
