// crates/fleetver-core/src/traits.rs

use async_trait::async_trait;

use crate::application::Application;
use crate::error::FleetError;
use crate::release::CommitMetadata;
use crate::version::Version;
use crate::zone::ConfigServerEndpoint;

/// Trait for enumerating the config servers of every zone in the system.
#[async_trait]
pub trait ZoneDirectory: Send + Sync {
    /// List the config server endpoints of all zones.
    async fn config_servers(&self) -> Result<Vec<ConfigServerEndpoint>, FleetError>;
}

/// Trait for asking a config server which platform version it runs.
#[async_trait]
pub trait NodeVersionClient: Send + Sync {
    /// Return the version currently running on the given config server.
    async fn version(&self, endpoint: &ConfigServerEndpoint) -> Result<Version, FleetError>;
}

/// Trait for reading every application known to the controller.
#[async_trait]
pub trait ApplicationRegistry: Send + Sync {
    /// Return all known applications.
    async fn applications(&self) -> Result<Vec<Application>, FleetError>;
}

/// Trait for resolving release commits.
#[async_trait]
pub trait CommitMetadataSource: Send + Sync {
    /// Look up the commit a reference (tag) points to in `owner/repo`.
    ///
    /// Fails if the reference does not exist.
    async fn commit(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<CommitMetadata, FleetError>;
}
