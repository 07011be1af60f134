// crates/fleetver-core/src/version.rs
//
// Platform version numbers: major.minor.micro with an optional qualifier.
// Numeric components compare numerically, the qualifier lexically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FleetError;

/// A totally ordered platform version number.
///
/// Missing components default to zero and the qualifier to the empty string,
/// so `"6.1"` and `"6.1.0"` are the same version. `0.0.0` is the empty version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
    qualifier: String,
}

impl Version {
    /// Create a version without a qualifier.
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    /// Create a version with a qualifier.
    pub fn with_qualifier(major: u32, minor: u32, micro: u32, qualifier: &str) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: qualifier.to_string(),
        }
    }

    /// The empty version, `0.0.0`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn micro(&self) -> u32 {
        self.micro
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// Whether this is the empty version `0.0.0`.
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Full string form: always three numeric components, plus the qualifier
    /// when present. This is also the release tag name for the version.
    pub fn to_full_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::empty());
        }

        let mut parts = trimmed.splitn(4, '.');
        let mut numbers = [0u32; 3];
        for slot in numbers.iter_mut() {
            match parts.next() {
                Some(part) => {
                    *slot = part.parse().map_err(|_| {
                        FleetError::InvalidVersion(format!(
                            "'{}': component '{}' is not a non-negative integer",
                            s, part
                        ))
                    })?;
                }
                None => break,
            }
        }

        let qualifier = parts.next().unwrap_or_default();
        if qualifier.contains('.') {
            return Err(FleetError::InvalidVersion(format!(
                "'{}': qualifier may not contain '.'",
                s
            )));
        }

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            micro: numbers[2],
            qualifier: qualifier.to_string(),
        })
    }
}

impl TryFrom<String> for Version {
    type Error = FleetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_full_string()
    }
}
