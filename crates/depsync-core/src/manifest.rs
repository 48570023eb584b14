use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

use depsync_util::errors::DepsyncError;

/// The parsed representation of a `package.json` file.
///
/// Only the fields depsync acts on are modeled; every other key is carried
/// through `extra` so a rewrite does not lose data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Package name to version specifier, possibly `^`/`~`-qualified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageManifest {
    /// Load and parse a `package.json` file from the given path.
    pub fn from_path(path: &Path) -> Result<Self, DepsyncError> {
        let content = std::fs::read_to_string(path).map_err(|e| DepsyncError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a `package.json` from a string.
    pub fn from_str(content: &str) -> Result<Self, DepsyncError> {
        serde_json::from_str(content).map_err(|e| DepsyncError::Manifest {
            message: format!("Failed to parse package.json: {e}"),
        })
    }

    /// Write the manifest back to disk as pretty-printed JSON.
    pub fn write_to(&self, path: &Path) -> Result<(), DepsyncError> {
        let content = serde_json::to_string_pretty(self).map_err(|e| DepsyncError::Manifest {
            message: format!("Failed to serialize package.json: {e}"),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
