// crates/fleetver-status/src/lib.rs
//
// fleetver-status: Version status computation.
//
// Reconciles this controller's version, the versions reported by config
// servers, and application job histories into an immutable VersionStatus:
// the platform versions in use, which of them is the system version, and
// which applications fail or succeed on each.

pub mod compute;
pub mod config;
pub mod config_servers;
pub mod memory;
pub mod metadata;
pub mod observer;
pub mod publisher;
pub mod snapshot;
pub mod statistics;
pub mod system_version;

pub use compute::VersionStatusComputer;
pub use config::StatusConfig;
pub use config_servers::ConfigServerVersionIndex;
pub use metadata::VersionMetadataResolver;
pub use observer::{RecordingObserver, StatusObserver, TracingObserver};
pub use publisher::SnapshotPublisher;
pub use snapshot::VersionStatus;
