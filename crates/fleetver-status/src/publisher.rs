// crates/fleetver-status/src/publisher.rs
//
// SnapshotPublisher: holds the currently published VersionStatus.
//
// Readers get the whole current snapshot as an Arc; a refresh swaps in a
// complete new snapshot, so readers never observe a partial one. A failed
// refresh leaves the previous snapshot in place. Refreshes run one at a time,
// so a slow cycle can never overwrite the result of a cycle started after it.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use fleetver_core::{FleetError, Version};

use crate::compute::VersionStatusComputer;
use crate::snapshot::VersionStatus;

/// Shared handle to the published version status.
#[derive(Clone)]
pub struct SnapshotPublisher {
    /// Current snapshot; `VersionStatus::empty()` until the first refresh.
    current: Arc<RwLock<Arc<VersionStatus>>>,
    /// Held for the duration of a refresh.
    refresh_lock: Arc<Mutex<()>>,
}

impl SnapshotPublisher {
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(VersionStatus::empty()))),
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The currently published snapshot.
    pub async fn current(&self) -> Arc<VersionStatus> {
        self.current.read().await.clone()
    }

    /// Replace the published snapshot, returning the one it replaced.
    pub async fn publish(&self, status: VersionStatus) -> Arc<VersionStatus> {
        let mut current = self.current.write().await;
        std::mem::replace(&mut *current, Arc::new(status))
    }

    /// Run one computation cycle and publish its result.
    ///
    /// On failure the error is reported to the computer's observer and
    /// returned, and the previous snapshot stays published. A refresh that
    /// overlaps another waits for it, so snapshots are published in the order
    /// refreshes were requested.
    pub async fn refresh(
        &self,
        computer: &VersionStatusComputer,
        self_version: &Version,
    ) -> Result<Arc<VersionStatus>, FleetError> {
        let _running = self.refresh_lock.lock().await;
        match computer.compute(self_version).await {
            Ok(status) => {
                let status = Arc::new(status);
                *self.current.write().await = status.clone();
                Ok(status)
            }
            Err(e) => {
                computer.observer().computation_failed(&e);
                Err(e)
            }
        }
    }
}

impl Default for SnapshotPublisher {
    fn default() -> Self {
        Self::new()
    }
}
