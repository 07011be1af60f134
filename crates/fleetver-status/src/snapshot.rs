// crates/fleetver-status/src/snapshot.rs
//
// VersionStatus: the immutable set of platform versions in use, with
// deployment statistics, sorted from lowest to highest version number.

use serde::Serialize;

use fleetver_core::{Version, VespaVersion};

/// Information about the platform versions currently in use.
///
/// A new status is computed each cycle and replaces the previous one as a
/// whole; it is never modified after construction.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct VersionStatus {
    versions: Vec<VespaVersion>,
}

impl VersionStatus {
    /// Create a status from resolved versions.
    ///
    /// Entries are sorted ascending; if a version number occurs more than
    /// once only the first occurrence is kept.
    pub fn new(mut versions: Vec<VespaVersion>) -> Self {
        versions.sort();
        versions.dedup();
        Self { versions }
    }

    /// The status before any computation has run.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The current system version, or `None` if it is not known in this
    /// status (e.g. its release metadata could not be resolved).
    pub fn system_version(&self) -> Option<&VespaVersion> {
        self.versions.iter().find(|v| v.is_system_version())
    }

    /// All versions in use, lowest first.
    pub fn versions(&self) -> &[VespaVersion] {
        &self.versions
    }

    /// The entry for the given version, if present.
    pub fn version(&self, version: &Version) -> Option<&VespaVersion> {
        self.versions.iter().find(|v| v.version_number() == version)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
