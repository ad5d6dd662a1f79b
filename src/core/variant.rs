//! Build variants.

use std::fmt;

use serde::Serialize;

use crate::core::naming;

/// A named build configuration of a project (e.g. `debug`, `release`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Variant {
    name: String,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Variant { name: name.into() }
    }

    /// The variant name as the host reports it (lower camel case).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of this variant's flatdeps task.
    pub fn task_name(&self) -> String {
        naming::variant_task_name(&self.name)
    }

    /// File name of this variant's manifest.
    pub fn manifest_file_name(&self) -> String {
        naming::manifest_file_name(&self.name)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Which variant API shape a project exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantApi {
    /// One unified variant collection, delivered through callbacks.
    Unified,
    /// Separate application and library variant collections.
    Legacy,
}

impl fmt::Display for VariantApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantApi::Unified => f.write_str("unified"),
            VariantApi::Legacy => f.write_str("legacy"),
        }
    }
}
