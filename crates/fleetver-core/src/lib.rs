// crates/fleetver-core/src/lib.rs
//
// fleetver-core: Core types, error type, and collaborator traits for
// computing the fleet version status.
//
// This is the leaf crate of the workspace. It defines platform versions,
// the application registry view (deployments and job statuses), per-version
// deployment statistics, enriched release versions, and the traits through
// which zones, config servers, applications and release commits are read.

pub mod application;
pub mod error;
pub mod release;
pub mod statistics;
pub mod traits;
pub mod version;
pub mod zone;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use fleetver_core::Version;`

// Application registry types
pub use application::{Application, ApplicationId, Deployment, JobError, JobRun, JobStatus, JobType};

// Version types
pub use release::{CommitMetadata, VespaVersion};
pub use statistics::DeploymentStatistics;
pub use version::Version;

// Zone types
pub use zone::{ConfigServerEndpoint, ZoneId};

// Error type
pub use error::FleetError;

// Traits
pub use traits::{ApplicationRegistry, CommitMetadataSource, NodeVersionClient, ZoneDirectory};
