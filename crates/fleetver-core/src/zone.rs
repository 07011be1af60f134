// crates/fleetver-core/src/zone.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a zone: an environment (prod, staging, test, ...) in a region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId {
    pub environment: String,
    pub region: String,
}

impl ZoneId {
    pub fn new(environment: &str, region: &str) -> Self {
        Self {
            environment: environment.to_string(),
            region: region.to_string(),
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.environment, self.region)
    }
}

/// A config server endpoint in a zone, as listed by the zone directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigServerEndpoint {
    /// The zone this config server controls.
    pub zone: ZoneId,
    /// Endpoint URI, e.g. "https://cfg1.prod.us-east-3.example.com:4443".
    pub uri: String,
}

impl ConfigServerEndpoint {
    pub fn new(zone: ZoneId, uri: &str) -> Self {
        Self {
            zone,
            uri: uri.to_string(),
        }
    }
}
