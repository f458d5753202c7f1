use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;
use thiserror::Error;

/// `<MAJOR>.<MINOR>.<BUILD>`, components kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: SmolStr,
    pub minor: SmolStr,
    pub build: SmolStr,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("version '{0}' is not of the form <MAJOR>.<MINOR>.<BUILD>")]
pub struct VersionFormatError(pub String);

impl Version {
    pub fn new(major: &str, minor: &str, build: &str) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
            build: build.into(),
        }
    }
}

impl FromStr for Version {
    type Err = VersionFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), Some(build), None) => Ok(Version::new(major, minor, build)),
            _ => Err(VersionFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}
