//! Project settings handling
//!
//! Settings live under the `detox` key of the project's `package.json`.
//! Every key is kept as raw JSON: the option resolver looks it up under either
//! spelling, and runner-specific values (such as a configuration's worker
//! hint) are interpreted only by the runner that uses them.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use super::paths::manifest_path;
use super::{Error, Result};

/// The parts of `package.json` this tool reads
#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    detox: Option<DetoxSettings>,
}

/// The `detox` settings object
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DetoxSettings {
    #[serde(flatten)]
    values: Map<String, Value>,
}

impl DetoxSettings {
    /// Load settings from `package.json` in the given project root
    ///
    /// A manifest without a `detox` key yields empty settings.
    pub fn load(root: &Path) -> Result<Self> {
        let path = manifest_path(root);
        let content = std::fs::read_to_string(&path).map_err(|e| Error::ManifestRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_manifest_str(&content)
    }

    /// Parse settings out of the text of a `package.json`
    pub fn from_manifest_str(content: &str) -> Result<Self> {
        let manifest: PackageManifest =
            serde_json::from_str(content).map_err(|e| Error::ManifestParse(e.to_string()))?;

        match manifest.detox {
            Some(settings) => Ok(settings),
            None => {
                tracing::warn!("No 'detox' section found in package.json, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Build settings directly from a JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::ManifestParse(e.to_string()))
    }

    /// Raw value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Named device configurations, if `configurations` is an object
    pub fn configurations(&self) -> Option<&Map<String, Value>> {
        self.get("configurations").and_then(Value::as_object)
    }

    /// Look up a device configuration by name
    pub fn configuration(&self, name: &str) -> Option<&Value> {
        self.configurations().and_then(|c| c.get(name))
    }

    /// The configuration name, if exactly one configuration is defined
    pub fn sole_configuration(&self) -> Option<&str> {
        let configurations = self.configurations()?;
        if configurations.len() == 1 {
            configurations.keys().next().map(String::as_str)
        } else {
            None
        }
    }
}
