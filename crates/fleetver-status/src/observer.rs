// crates/fleetver-status/src/observer.rs
//
// Observability sink for version status computation. The computer reports
// through this trait instead of logging directly, so embedders and tests can
// capture what happened during a cycle.

use std::sync::Mutex;

use fleetver_core::{FleetError, Version};

/// Receives notable events from a version status computation.
pub trait StatusObserver: Send + Sync {
    /// A config server reported its version.
    fn config_server_version(&self, _hostname: &str, _version: &Version) {}

    /// Release metadata could not be resolved; the version is left out.
    fn metadata_lookup_failed(&self, version: &Version, error: &FleetError);

    /// A snapshot was computed.
    fn computed(&self, _entries: usize, _system_version: Option<&Version>) {}

    /// A cycle failed as a whole; the previous snapshot stays published.
    fn computation_failed(&self, _error: &FleetError) {}
}

/// Observer that emits `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StatusObserver for TracingObserver {
    fn config_server_version(&self, hostname: &str, version: &Version) {
        tracing::debug!("Config server {} runs {}", hostname, version);
    }

    fn metadata_lookup_failed(&self, version: &Version, error: &FleetError) {
        tracing::warn!(
            version = %version.to_full_string(),
            "Unable to create VespaVersion for version {}: {}",
            version.to_full_string(),
            error
        );
    }

    fn computed(&self, entries: usize, system_version: Option<&Version>) {
        match system_version {
            Some(version) => tracing::info!(
                "Version status computed: {} versions, system version {}",
                entries,
                version
            ),
            None => tracing::info!(
                "Version status computed: {} versions, system version unknown",
                entries
            ),
        }
    }

    fn computation_failed(&self, error: &FleetError) {
        tracing::warn!("Version status computation failed, keeping previous status: {}", error);
    }
}

/// Observer that records metadata lookup failures in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    failures: Mutex<Vec<(Version, String)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Versions whose metadata lookup failed, with the error message, in
    /// the order they were reported.
    pub fn failures(&self) -> Vec<(Version, String)> {
        match self.failures.lock() {
            Ok(failures) => failures.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl StatusObserver for RecordingObserver {
    fn metadata_lookup_failed(&self, version: &Version, error: &FleetError) {
        let mut failures = match self.failures.lock() {
            Ok(failures) => failures,
            Err(poisoned) => poisoned.into_inner(),
        };
        failures.push((version.clone(), error.to_string()));
    }
}
