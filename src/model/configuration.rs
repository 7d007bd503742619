use super::node::ComputingNode;
use super::station::Station;
use crate::error::ConfigError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// Everything a user configured in one session: computing nodes and
/// stations, each keyed by id.
///
/// This is the input of the serializer. It is normally taken from
/// [`ConfigurationState::snapshot`](crate::store::ConfigurationState::snapshot),
/// but can also be loaded from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigurationObject {
    #[serde(default)]
    pub nodes: AHashMap<String, ComputingNode>,
    #[serde(default)]
    pub stations: AHashMap<String, Station>,
}

impl ConfigurationObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))
    }

    /// Load a configuration snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::JsonEncodeError(e.to_string()))
    }

    /// Saves the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| ConfigError::WriteError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Number of simulator devices the stations expand into.
    pub fn device_count(&self) -> u64 {
        self.stations.values().map(|s| u64::from(s.quantity)).sum()
    }
}
