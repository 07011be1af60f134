use thiserror::Error;

use crate::version::Version;

/// Error type shared by every fleet version status crate.
#[derive(Debug, Error)]
pub enum FleetError {
    /// A structural precondition was violated (e.g. an empty version set).
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Release commit metadata could not be resolved for a version.
    #[error("Metadata lookup failed for {version}: {reason}")]
    MetadataLookup { version: Version, reason: String },

    /// A collaborator (node, zone directory, application registry) failed.
    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A version string could not be parsed.
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// Configuration could not be read.
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FleetError {
    fn from(e: serde_json::Error) -> Self {
        FleetError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for FleetError {
    fn from(e: toml::de::Error) -> Self {
        FleetError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for FleetError {
    fn from(e: std::io::Error) -> Self {
        FleetError::Config(e.to_string())
    }
}
