use camino::Utf8PathBuf;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModType {
    /// A single legacy script file.
    #[display("standalone")]
    Standalone,
    /// A directory-based mod.
    #[display("regular")]
    Regular,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    /// No machine-readable manifest.
    #[display("legacy")]
    Legacy,
    /// Has a parsed `module.json`.
    #[display("compatible")]
    Compatible,
}

/// Normalized view of one installed mod, rebuilt on every load.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModDescriptor {
    pub name: String,
    pub raw_name: String,
    pub path: Utf8PathBuf,
    #[serde(rename = "type")]
    pub mod_type: ModType,
    pub compatibility: Compatibility,
    pub keywords: Vec<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub donation_url: Option<String>,
    pub support_url: Option<String>,
    pub drm_key: Option<String>,
    pub options: Map<String, Value>,
    pub dependencies: Vec<String>,
    pub conflicts: Vec<String>,
    pub packets: Map<String, Value>,
    pub disabled: bool,
    pub disable_auto_update: bool,
    pub readme_path: Option<Utf8PathBuf>,
    pub is_core_module: bool,
}

impl ModDescriptor {
    /// Legacy defaults for a mod found at `path` under the on-disk name `raw_name`.
    pub fn legacy(raw_name: &str, path: Utf8PathBuf, mod_type: ModType) -> Self {
        Self {
            name: raw_name.to_lowercase(),
            raw_name: raw_name.to_string(),
            path,
            mod_type,
            compatibility: Compatibility::Legacy,
            keywords: Vec::new(),
            author: None,
            description: None,
            version: None,
            donation_url: None,
            support_url: None,
            drm_key: None,
            options: Map::new(),
            dependencies: Vec::new(),
            conflicts: Vec::new(),
            packets: Map::new(),
            disabled: false,
            disable_auto_update: false,
            readme_path: None,
            is_core_module: false,
        }
    }

    pub fn is_compatible(&self) -> bool {
        self.compatibility == Compatibility::Compatible
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub(crate) fn add_keyword(&mut self, keyword: &str) {
        if !self.has_keyword(keyword) {
            self.keywords.push(keyword.to_string());
        }
    }
}

/// Manifest-shaped data written verbatim as a new mod's `module.json`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct InstallInfo(pub Map<String, Value>);

impl InstallInfo {
    pub fn name(&self) -> Option<&str> {
        self.0
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
    }
}

impl From<Map<String, Value>> for InstallInfo {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for InstallInfo {
    type Error = crate::models::error::RegistryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(crate::models::error::RegistryError::ParseError(format!(
                "install info must be a JSON object, got {other}"
            ))),
        }
    }
}
