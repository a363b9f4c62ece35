use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::definition::{Agent, Definition, Infrastructure, OperatingSystem};
use crate::kernel::error::{Error, Result};
use crate::storage::error::StorageSystemError;

/// Supported definition file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// A possibly partial definition, as written in a definition file.
///
/// ```toml
/// infrastructure = "openstack"
/// operating_system = "ubuntu"
/// agent = "go"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<Infrastructure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<OperatingSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
}

impl DefinitionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a definition file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            StorageSystemError::UnsupportedConfigFormat(path.display().to_string())
        })?;
        if !path.exists() {
            return Err(StorageSystemError::FileNotFound(path.to_path_buf()).into());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(e, "read_definition", path.to_path_buf()))?;
        let config = Self::parse(&content, format)?;
        info!("Loaded definition file {}", path.display());
        Ok(config)
    }

    /// Parse a definition from a string
    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self> {
        let parsed = match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(boxed),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(boxed),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(boxed),
        };
        parsed.map_err(|source| {
            Error::from(StorageSystemError::DeserializationError {
                format: format.extension().to_string(),
                source,
            })
        })
    }

    /// Serialize to string based on format
    pub fn serialize(&self, format: ConfigFormat) -> Result<String> {
        let serialized = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(boxed),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(boxed),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(boxed),
        };
        serialized.map_err(|source| {
            Error::from(StorageSystemError::SerializationError {
                format: format.extension().to_string(),
                source,
            })
        })
    }

    /// Overlay `other` on top of `self`; axes set in `other` win.
    pub fn merge(self, other: DefinitionConfig) -> Self {
        Self {
            infrastructure: other.infrastructure.or(self.infrastructure),
            operating_system: other.operating_system.or(self.operating_system),
            agent: other.agent.or(self.agent),
        }
    }

    /// Resolve into a full definition. Every axis must be set.
    pub fn into_definition(self) -> Result<Definition> {
        let infrastructure = self
            .infrastructure
            .ok_or(Error::IncompleteDefinition { axis: "infrastructure" })?;
        let operating_system = self
            .operating_system
            .ok_or(Error::IncompleteDefinition { axis: "operating_system" })?;
        let agent = self.agent.ok_or(Error::IncompleteDefinition { axis: "agent" })?;
        Ok(Definition::new(infrastructure, operating_system, agent))
    }
}

impl From<Definition> for DefinitionConfig {
    fn from(definition: Definition) -> Self {
        Self {
            infrastructure: Some(definition.infrastructure()),
            operating_system: Some(definition.operating_system()),
            agent: Some(definition.agent()),
        }
    }
}

fn boxed<E>(e: E) -> Box<dyn std::error::Error + Send + Sync + 'static>
where
    E: std::error::Error + Send + Sync + 'static,
{
    Box::new(e)
}
