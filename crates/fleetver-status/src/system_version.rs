// crates/fleetver-status/src/system_version.rs
//
// The system version is the oldest infrastructure version: the controller
// itself and every config server run at least this version.

use std::iter;

use fleetver_core::{FleetError, Version};

/// Resolve the system version from this controller's version and the
/// versions reported by config servers.
pub fn resolve<'a, I>(self_version: &'a Version, config_server_versions: I) -> Result<Version, FleetError>
where
    I: IntoIterator<Item = &'a Version>,
{
    lowest(iter::once(self_version).chain(config_server_versions))
}

/// Lowest of a set of infrastructure versions.
///
/// Fails with `FleetError::Precondition` if the set is empty.
pub fn lowest<'a, I>(versions: I) -> Result<Version, FleetError>
where
    I: IntoIterator<Item = &'a Version>,
{
    versions.into_iter().min().cloned().ok_or_else(|| {
        FleetError::Precondition("no infrastructure versions to choose a system version from".to_string())
    })
}
