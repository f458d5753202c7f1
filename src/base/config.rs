//! Immutable model configuration.
//!
//! The base-type set and the numeric literal suffix map are loaded once and
//! passed by reference into every validation stage. [`ModelConfig::global`]
//! returns the process-wide default; a project can override it from YAML.

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use serde::Deserialize;
use smol_str::SmolStr;
use thiserror::Error;

/// Base scalar types understood by the code emitter, in emission order.
pub const BASE_TYPES: &[&str] = &[
    "uint8_t", "uint16_t", "uint32_t", "int8_t", "int16_t", "int32_t", "float", "double",
];

/// Base type whose literal suffix is applied to floating-point leaves of
/// structured default values.
pub const FLOAT_TYPE: &str = "float";

static GLOBAL: Lazy<ModelConfig> = Lazy::new(ModelConfig::default);

/// Errors raised while loading a configuration override.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: base type list is empty")]
    NoBaseTypes,

    #[error("invalid config: literal suffix given for unknown base type '{0}'")]
    UnknownSuffixType(SmolStr),
}

/// Process-wide constant tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelConfig {
    base_types: IndexSet<SmolStr>,
    literal_suffixes: IndexMap<SmolStr, SmolStr>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    base_types: Option<Vec<SmolStr>>,
    #[serde(default)]
    literal_suffixes: Option<IndexMap<SmolStr, SmolStr>>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        let base_types: IndexSet<SmolStr> = BASE_TYPES.iter().map(|t| SmolStr::new(*t)).collect();
        let literal_suffixes = base_types
            .iter()
            .map(|t| {
                let suffix = if t == FLOAT_TYPE { "F" } else { "" };
                (t.clone(), SmolStr::new(suffix))
            })
            .collect();
        Self {
            base_types,
            literal_suffixes,
        }
    }
}

impl ModelConfig {
    /// The shared default configuration.
    pub fn global() -> &'static ModelConfig {
        &GLOBAL
    }

    /// Parse a YAML override. Missing keys keep their defaults.
    ///
    /// ```yaml
    /// baseTypes: [uint8_t, float, bool]
    /// literalSuffixes:
    ///   float: F
    /// ```
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = if content.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(content)?
        };

        let mut config = Self::default();
        if let Some(types) = file.base_types {
            if types.is_empty() {
                return Err(ConfigError::NoBaseTypes);
            }
            config.base_types = types.into_iter().collect();
            config
                .literal_suffixes
                .retain(|ty, _| config.base_types.contains(ty));
        }
        if let Some(suffixes) = file.literal_suffixes {
            for (ty, suffix) in suffixes {
                if !config.base_types.contains(&ty) {
                    return Err(ConfigError::UnknownSuffixType(ty));
                }
                config.literal_suffixes.insert(ty, suffix);
            }
        }
        Ok(config)
    }

    /// Load a YAML override from disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn is_base_type(&self, name: &str) -> bool {
        self.base_types.contains(name)
    }

    pub fn base_types(&self) -> impl Iterator<Item = &str> {
        self.base_types.iter().map(SmolStr::as_str)
    }

    /// Literal suffix for a base type; empty for types without one.
    pub fn literal_suffix(&self, ty: &str) -> &str {
        self.literal_suffixes
            .get(ty)
            .map(SmolStr::as_str)
            .unwrap_or("")
    }

    /// The full suffix map, as handed to emitters.
    pub fn literal_suffixes(&self) -> &IndexMap<SmolStr, SmolStr> {
        &self.literal_suffixes
    }
}
