use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::carrier::Carrier;
use crate::error::{ConfigError, TableError};
use crate::table::CarrierTable;

/// Classifier settings stored in carrier_table.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClassifierConfig {
    /// Reject dotted quads with octets above 255
    #[serde(default)]
    pub strict_octets: bool,
    /// Replacement table; the built-in one is used when absent
    #[serde(default)]
    pub table: Option<TableConfig>,
}

impl ClassifierConfig {
    /// Load from the default location, falling back to defaults if the file
    /// does not exist. Nothing is written back.
    pub fn load() -> Result<Self, ConfigError> {
        match super::paths::table_config_file() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }
}

/// A carrier table as written in config
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TableConfig {
    #[serde(default)]
    pub single_prefixes: Vec<PrefixEntry>,
    #[serde(default)]
    pub ipv4_ranges: Vec<RangeEntry>,
    #[serde(default)]
    pub ipv6_prefixes: Vec<PrefixEntry>,
}

impl TableConfig {
    pub fn build(&self) -> Result<CarrierTable, TableError> {
        let mut builder = CarrierTable::builder();
        for entry in &self.single_prefixes {
            builder = builder.single_prefix(entry.prefix.as_str(), entry.carrier);
        }
        for entry in &self.ipv4_ranges {
            builder = builder.ipv4_range(entry.start.as_str(), entry.end.as_str(), entry.carrier);
        }
        for entry in &self.ipv6_prefixes {
            builder = builder.ipv6_prefix(entry.prefix.as_str(), entry.carrier);
        }
        builder.build()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrefixEntry {
    pub prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeEntry {
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
}
