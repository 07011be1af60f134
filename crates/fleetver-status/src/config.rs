// crates/fleetver-status/src/config.rs
//
// Configuration for version status computation.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

use fleetver_core::{FleetError, Version};

/// Configuration for resolving release metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusConfig {
    /// Owner of the repository holding the platform release tags.
    #[serde(default = "default_release_repo_owner")]
    pub release_repo_owner: String,

    /// Name of the repository holding the platform release tags.
    #[serde(default = "default_release_repo")]
    pub release_repo: String,

    /// Prefix prepended to a version's full string to form its release tag
    /// (e.g. "v" for tags like "v6.1.0"). Empty by default.
    #[serde(default)]
    pub tag_prefix: String,
}

fn default_release_repo_owner() -> String {
    "vespa".to_string()
}

fn default_release_repo() -> String {
    "vespa-yahoo".to_string()
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            release_repo_owner: default_release_repo_owner(),
            release_repo: default_release_repo(),
            tag_prefix: String::new(),
        }
    }
}

impl StatusConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &str) -> Result<Self, FleetError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FleetError::Config(format!("cannot read {}: {}", path, e)))?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, FleetError> {
        Ok(toml::from_str(contents)?)
    }

    /// Release tag name for a version.
    pub fn release_tag(&self, version: &Version) -> String {
        format!("{}{}", self.tag_prefix, version.to_full_string())
    }
}
