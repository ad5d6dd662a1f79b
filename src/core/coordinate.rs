//! Module coordinates - WHICH library (group + name + version).
//!
//! A ModuleCoordinate is the identity of one resolved library artifact.
//! The derived ordering compares `group`, then `name`, then `version` as
//! plain strings, which is the canonical order of every flattened manifest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A resolved module coordinate, written as `group:name:version`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleCoordinate {
    group: String,
    name: String,
    version: String,
}

/// Error parsing a `group:name:version` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("invalid module coordinate `{input}`: expected `group:name:version`")]
    WrongArity { input: String },

    #[error("invalid module coordinate `{input}`: {part} is empty")]
    EmptyPart { input: String, part: &'static str },
}

impl ModuleCoordinate {
    /// Create a new coordinate.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        ModuleCoordinate {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

impl FromStr for ModuleCoordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [group, name, version] = parts.as_slice() else {
            return Err(CoordinateError::WrongArity {
                input: s.to_string(),
            });
        };

        for (part, value) in [("group", group), ("name", name), ("version", version)] {
            if value.is_empty() {
                return Err(CoordinateError::EmptyPart {
                    input: s.to_string(),
                    part,
                });
            }
        }

        Ok(ModuleCoordinate::new(*group, *name, *version))
    }
}

impl Serialize for ModuleCoordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModuleCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
