// crates/fleetver-status/src/compute.rs
//
// One version status computation cycle.
//
// Steps:
// 1. Ask every config server in every zone for its version
// 2. Resolve the system version: the oldest of this controller and all config servers
// 3. Aggregate deployment statistics over all applications
// 4. Resolve release metadata per version, leaving out versions that fail
// 5. Sort and freeze the result
//
// A failing zone directory, config server or application registry fails the
// whole cycle. A failing metadata lookup only drops that version.

use std::collections::BTreeSet;
use std::sync::Arc;

use fleetver_core::{
    ApplicationRegistry, CommitMetadataSource, FleetError, NodeVersionClient, Version, ZoneDirectory,
};

use crate::config::StatusConfig;
use crate::config_servers::{hostname_of, ConfigServerVersionIndex};
use crate::metadata::VersionMetadataResolver;
use crate::observer::{StatusObserver, TracingObserver};
use crate::snapshot::VersionStatus;
use crate::{statistics, system_version};

/// Computes `VersionStatus` snapshots from the fleet's collaborators.
#[derive(Clone)]
pub struct VersionStatusComputer {
    zones: Arc<dyn ZoneDirectory>,
    nodes: Arc<dyn NodeVersionClient>,
    applications: Arc<dyn ApplicationRegistry>,
    metadata: VersionMetadataResolver,
    observer: Arc<dyn StatusObserver>,
}

impl VersionStatusComputer {
    /// Create a computer that reports through `TracingObserver`.
    pub fn new(
        zones: Arc<dyn ZoneDirectory>,
        nodes: Arc<dyn NodeVersionClient>,
        applications: Arc<dyn ApplicationRegistry>,
        commits: Arc<dyn CommitMetadataSource>,
        config: StatusConfig,
    ) -> Self {
        Self {
            zones,
            nodes,
            applications,
            metadata: VersionMetadataResolver::new(commits, config),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the observability sink.
    pub fn with_observer(mut self, observer: Arc<dyn StatusObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn observer(&self) -> &dyn StatusObserver {
        self.observer.as_ref()
    }

    /// Compute a full, updated version status with `self_version` as the
    /// version of this controller. This is expensive and should be done
    /// infrequently.
    pub async fn compute(&self, self_version: &Version) -> Result<VersionStatus, FleetError> {
        let config_servers = self.config_server_versions().await?;

        let system_version = system_version::resolve(self_version, config_servers.versions())?;

        let mut infrastructure_versions: BTreeSet<Version> =
            config_servers.versions().cloned().collect();
        infrastructure_versions.insert(self_version.clone());

        let applications = self.applications.applications().await?;
        let deployment_statistics = statistics::aggregate(&infrastructure_versions, &applications);

        let mut versions = Vec::with_capacity(deployment_statistics.len());
        for stats in deployment_statistics {
            if stats.version().is_empty() {
                continue;
            }

            let version = stats.version().clone();
            let is_system_version = version == system_version;
            let hostnames = config_servers.hostnames(&version).to_vec();

            match self.metadata.resolve(stats, is_system_version, hostnames).await {
                Ok(vespa_version) => versions.push(vespa_version),
                Err(e) => self.observer.metadata_lookup_failed(&version, &e),
            }
        }

        let status = VersionStatus::new(versions);
        self.observer.computed(
            status.len(),
            status.system_version().map(|v| v.version_number()),
        );
        Ok(status)
    }

    /// Query every config server for its version.
    pub async fn config_server_versions(&self) -> Result<ConfigServerVersionIndex, FleetError> {
        let endpoints = self.zones.config_servers().await?;

        let mut observations = Vec::with_capacity(endpoints.len());
        for endpoint in &endpoints {
            let version = self.nodes.version(endpoint).await?;
            let hostname = hostname_of(&endpoint.uri);
            self.observer.config_server_version(&hostname, &version);
            observations.push((version, hostname));
        }

        Ok(ConfigServerVersionIndex::from_observations(observations))
    }
}
