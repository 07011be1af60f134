// crates/fleetver-core/src/statistics.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::application::ApplicationId;
use crate::version::Version;

/// Deployment health of one platform version.
///
/// Values are never mutated in place: `with_failing` and `with_producing`
/// return an updated copy. The two sets are not required to be disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStatistics {
    version: Version,
    /// Applications whose last upgrade to this version failed.
    failing: BTreeSet<ApplicationId>,
    /// Applications with a successful production deployment on this version.
    production: BTreeSet<ApplicationId>,
}

impl DeploymentStatistics {
    /// Statistics for a version with no failing or producing applications.
    pub fn empty(version: Version) -> Self {
        Self {
            version,
            failing: BTreeSet::new(),
            production: BTreeSet::new(),
        }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn failing(&self) -> &BTreeSet<ApplicationId> {
        &self.failing
    }

    pub fn production(&self) -> &BTreeSet<ApplicationId> {
        &self.production
    }

    /// Returns a copy with `application` added to the failing set.
    pub fn with_failing(&self, application: ApplicationId) -> Self {
        let mut failing = self.failing.clone();
        failing.insert(application);
        Self {
            version: self.version.clone(),
            failing,
            production: self.production.clone(),
        }
    }

    /// Returns a copy with `application` added to the producing set.
    pub fn with_producing(&self, application: ApplicationId) -> Self {
        let mut production = self.production.clone();
        production.insert(application);
        Self {
            version: self.version.clone(),
            failing: self.failing.clone(),
            production,
        }
    }
}
