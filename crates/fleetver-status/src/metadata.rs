// crates/fleetver-status/src/metadata.rs
//
// Enriches deployment statistics with the release commit of their version.

use std::sync::Arc;

use fleetver_core::{CommitMetadataSource, DeploymentStatistics, FleetError, VespaVersion};

use crate::config::StatusConfig;

/// Resolves release commits for versions and builds `VespaVersion`s.
#[derive(Clone)]
pub struct VersionMetadataResolver {
    commits: Arc<dyn CommitMetadataSource>,
    config: StatusConfig,
}

impl VersionMetadataResolver {
    pub fn new(commits: Arc<dyn CommitMetadataSource>, config: StatusConfig) -> Self {
        Self { commits, config }
    }

    /// Build a fully populated `VespaVersion` for the given statistics.
    ///
    /// Any failure to resolve the release tag is returned as
    /// `FleetError::MetadataLookup` naming the version.
    pub async fn resolve(
        &self,
        statistics: DeploymentStatistics,
        is_system_version: bool,
        config_servers: Vec<String>,
    ) -> Result<VespaVersion, FleetError> {
        let version = statistics.version().clone();
        let tag = self.config.release_tag(&version);

        let commit = self
            .commits
            .commit(&self.config.release_repo_owner, &self.config.release_repo, &tag)
            .await
            .map_err(|e| match e {
                lookup @ FleetError::MetadataLookup { .. } => lookup,
                other => FleetError::MetadataLookup {
                    version: version.clone(),
                    reason: other.to_string(),
                },
            })?;

        Ok(VespaVersion::new(statistics, commit, is_system_version, config_servers))
    }
}
