use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A mode token that is not part of a closed set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a supported mode")]
pub struct UnknownMode(pub String);

/// How a group's values survive across restarts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Persistence {
    None,
    Cyclic,
    OnWrite,
}

impl Persistence {
    pub const ALL: [Persistence; 3] = [Self::None, Self::Cyclic, Self::OnWrite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Cyclic => "Cyclic",
            Self::OnWrite => "OnWrite",
        }
    }
}

impl FromStr for Persistence {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access permission of a datapoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Access {
    pub const ALL: [Access; 3] = [Self::ReadOnly, Self::WriteOnly, Self::ReadWrite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "READONLY",
            Self::WriteOnly => "WRITEONLY",
            Self::ReadWrite => "READWRITE",
        }
    }
}

impl FromStr for Access {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
