// crates/fleetver-status/src/config_servers.rs
//
// Index of which config servers run which platform version.

use std::collections::BTreeMap;

use fleetver_core::Version;

/// Mapping from version to the hostnames of config servers reporting it.
///
/// Hostnames keep observation order per version; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigServerVersionIndex {
    hosts: BTreeMap<Version, Vec<String>>,
}

impl ConfigServerVersionIndex {
    /// Build the index from (version, hostname) observations.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = (Version, String)>,
    {
        let mut hosts: BTreeMap<Version, Vec<String>> = BTreeMap::new();
        for (version, hostname) in observations {
            hosts.entry(version).or_default().push(hostname);
        }
        Self { hosts }
    }

    /// Hostnames running `version`, empty if none.
    pub fn hostnames(&self, version: &Version) -> &[String] {
        self.hosts.get(version).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All versions reported by at least one config server, ascending.
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.hosts.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Hostname of a config server endpoint URI.
///
/// Falls back to the endpoint string itself when it has no parseable host.
pub fn hostname_of(uri: &str) -> String {
    url::Url::parse(uri)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| uri.to_string())
}
