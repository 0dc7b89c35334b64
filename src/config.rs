use crate::errors::{MergerError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Merger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Separator between variant modifiers and the utility
    pub separator: String,

    /// Registry extensions
    pub extend: ExtendConfig,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            separator: ":".to_string(),
            extend: ExtendConfig::default(),
        }
    }
}

/// User extensions to the default utility group registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendConfig {
    /// Group id to class patterns; a trailing `*` makes a pattern a prefix matcher
    pub groups: IndexMap<String, Vec<String>>,

    /// Group id to additional group ids it overrides
    pub conflicts: IndexMap<String, Vec<String>>,
}

impl MergeConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MergerError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_yaml::from_str(&content).map_err(|e| MergerError::ConfigError {
            message: format!("Failed to parse YAML config: {}", e),
        })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MergerError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&content).map_err(|e| MergerError::ConfigError {
            message: format!("Failed to parse JSON config: {}", e),
        })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(MergerError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Merge with another configuration
    pub fn merge(mut self, other: Self) -> Self {
        // A non-default separator in the other config wins
        if other.separator != Self::default().separator {
            self.separator = other.separator;
        }

        // Merge registry extensions
        for (group, patterns) in other.extend.groups {
            let entry = self.extend.groups.entry(group).or_default();
            for pattern in patterns {
                if !entry.contains(&pattern) {
                    entry.push(pattern);
                }
            }
        }
        for (group, overrides) in other.extend.conflicts {
            let entry = self.extend.conflicts.entry(group).or_default();
            for overridden in overrides {
                if !entry.contains(&overridden) {
                    entry.push(overridden);
                }
            }
        }

        self
    }
}
