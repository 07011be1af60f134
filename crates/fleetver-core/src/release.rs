// crates/fleetver-core/src/release.rs
//
// A platform version enriched with its release commit, system version flag,
// and the config servers currently running it.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::statistics::DeploymentStatistics;
use crate::version::Version;

/// Release commit of a version, as reported by the commit metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMetadata {
    pub sha: String,
    /// Author timestamp of the commit.
    pub authored_at: DateTime<Utc>,
}

/// A platform version currently in use somewhere in the fleet.
///
/// Equality and ordering consider only the version number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VespaVersion {
    #[serde(flatten)]
    statistics: DeploymentStatistics,
    is_system_version: bool,
    commit_sha: String,
    committed_at: DateTime<Utc>,
    config_servers: Vec<String>,
}

impl VespaVersion {
    pub fn new(
        statistics: DeploymentStatistics,
        commit: CommitMetadata,
        is_system_version: bool,
        config_servers: Vec<String>,
    ) -> Self {
        Self {
            statistics,
            is_system_version,
            commit_sha: commit.sha,
            committed_at: commit.authored_at,
            config_servers,
        }
    }

    pub fn version_number(&self) -> &Version {
        self.statistics.version()
    }

    pub fn statistics(&self) -> &DeploymentStatistics {
        &self.statistics
    }

    /// Whether this is the current system version.
    pub fn is_system_version(&self) -> bool {
        self.is_system_version
    }

    pub fn release_commit(&self) -> &str {
        &self.commit_sha
    }

    pub fn committed_at(&self) -> DateTime<Utc> {
        self.committed_at
    }

    /// Hostnames of config servers running this version, in observation order.
    pub fn config_servers(&self) -> &[String] {
        &self.config_servers
    }
}

impl PartialEq for VespaVersion {
    fn eq(&self, other: &Self) -> bool {
        self.version_number() == other.version_number()
    }
}

impl Eq for VespaVersion {}

impl PartialOrd for VespaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VespaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version_number().cmp(other.version_number())
    }
}
