// crates/fleetver-status/src/memory.rs
//
// In-memory implementations of the collaborator traits.
//
// Used by tests and by embedders that already hold the fleet data and only
// need the version status computation.

use std::collections::HashMap;

use async_trait::async_trait;

use fleetver_core::{
    Application, ApplicationRegistry, CommitMetadata, CommitMetadataSource, ConfigServerEndpoint,
    FleetError, NodeVersionClient, Version, ZoneDirectory,
};

/// Zone directory over a fixed list of config server endpoints.
#[derive(Debug, Clone, Default)]
pub struct StaticZoneDirectory {
    endpoints: Vec<ConfigServerEndpoint>,
}

impl StaticZoneDirectory {
    pub fn new(endpoints: Vec<ConfigServerEndpoint>) -> Self {
        Self { endpoints }
    }
}

#[async_trait]
impl ZoneDirectory for StaticZoneDirectory {
    async fn config_servers(&self) -> Result<Vec<ConfigServerEndpoint>, FleetError> {
        Ok(self.endpoints.clone())
    }
}

/// Node version client answering from a fixed URI -> version map.
///
/// Unknown endpoints fail as unreachable.
#[derive(Debug, Clone, Default)]
pub struct StaticNodeVersions {
    versions: HashMap<String, Version>,
}

impl StaticNodeVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `version` for the endpoint with the given URI.
    pub fn with_node(mut self, uri: &str, version: Version) -> Self {
        self.versions.insert(uri.to_string(), version);
        self
    }
}

#[async_trait]
impl NodeVersionClient for StaticNodeVersions {
    async fn version(&self, endpoint: &ConfigServerEndpoint) -> Result<Version, FleetError> {
        self.versions
            .get(&endpoint.uri)
            .cloned()
            .ok_or_else(|| FleetError::Upstream(format!("config server {} is unreachable", endpoint.uri)))
    }
}

/// Application registry over a fixed list of applications.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationRegistry {
    applications: Vec<Application>,
}

impl InMemoryApplicationRegistry {
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }
}

#[async_trait]
impl ApplicationRegistry for InMemoryApplicationRegistry {
    async fn applications(&self) -> Result<Vec<Application>, FleetError> {
        Ok(self.applications.clone())
    }
}

/// Commit metadata source over a fixed set of tags.
#[derive(Debug, Clone, Default)]
pub struct StaticCommitMetadata {
    tags: HashMap<(String, String, String), CommitMetadata>,
}

impl StaticCommitMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `tag` in `owner/repo` resolve to `commit`.
    pub fn with_tag(mut self, owner: &str, repo: &str, tag: &str, commit: CommitMetadata) -> Self {
        self.tags
            .insert((owner.to_string(), repo.to_string(), tag.to_string()), commit);
        self
    }
}

#[async_trait]
impl CommitMetadataSource for StaticCommitMetadata {
    async fn commit(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<CommitMetadata, FleetError> {
        self.tags
            .get(&(owner.to_string(), repo.to_string(), reference.to_string()))
            .cloned()
            .ok_or_else(|| FleetError::NotFound(format!("no reference {} in {}/{}", reference, owner, repo)))
    }
}
