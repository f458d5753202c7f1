//! Raw model records, exactly as they appear in the model files.
//!
//! ```json
//! {
//!   "Groups": [{ "name": "DefaultGroup", "persistence": "None", "baseId": "0x4000" }],
//!   "Datapoints": [
//!     { "name": "temp", "group": "DefaultGroup", "id": 1, "type": "float", "access": "READWRITE" }
//!   ]
//! }
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use smol_str::SmolStr;

use super::value::Number;

/// The merged model document. Missing collections are empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawDocument {
    #[serde(default)]
    pub types: Vec<RawType>,
    #[serde(default)]
    pub enums: Vec<RawEnum>,
    #[serde(default)]
    pub structs: Vec<RawStruct>,
    #[serde(default)]
    pub groups: Vec<RawGroup>,
    #[serde(default)]
    pub datapoints: Vec<RawDatapoint>,
}

impl RawDocument {
    /// Append every collection of `other` to this document.
    ///
    /// Merging is a per-kind concatenation; uniqueness is only checked
    /// once the whole document has been assembled.
    pub fn merge(&mut self, other: RawDocument) {
        self.types.extend(other.types);
        self.enums.extend(other.enums);
        self.structs.extend(other.structs);
        self.groups.extend(other.groups);
        self.datapoints.extend(other.datapoints);
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.enums.is_empty()
            && self.structs.is_empty()
            && self.groups.is_empty()
            && self.datapoints.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawType {
    pub name: SmolStr,
    #[serde(rename = "type", default)]
    pub base_type: Option<SmolStr>,
    #[serde(default)]
    pub min: Option<Number>,
    #[serde(default)]
    pub max: Option<Number>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnum {
    pub name: SmolStr,
    #[serde(rename = "type")]
    pub base_type: SmolStr,
    #[serde(default)]
    pub values: Vec<RawEnumValue>,
    #[serde(default)]
    pub auto_id: Option<bool>,
}

/// One entry of an enum's `values` list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawEnumValue {
    /// `"Booting"`
    Label(SmolStr),
    /// `{"Warn": 4}`
    Mapping(IndexMap<SmolStr, i64>),
    /// A bare number, never valid but reported by the enum stage.
    Number(Number),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawStruct {
    pub name: SmolStr,
    #[serde(default, alias = "fields")]
    pub parameter: Vec<RawField>,
}

/// One struct parameter, either `{name: x, type: float}` or the short
/// form `{x: float}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Named {
        name: SmolStr,
        #[serde(rename = "type")]
        ty: SmolStr,
    },
    /// Must hold exactly one entry; checked by the struct stage.
    Mapping(IndexMap<SmolStr, SmolStr>),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGroup {
    pub name: SmolStr,
    pub persistence: SmolStr,
    pub base_id: RawToken,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub allow_upgrade: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDatapoint {
    pub name: SmolStr,
    #[serde(default)]
    pub namespace: Option<SmolStr>,
    pub group: SmolStr,
    pub id: u32,
    #[serde(rename = "type")]
    pub ty: SmolStr,
    pub access: SmolStr,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub array_size: Option<u32>,
    #[serde(default)]
    pub default: Option<RawValue>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub allow_upgrade: Option<bool>,
}

/// A token kept exactly as written, e.g. a group `baseId`.
///
/// `"0x4000"` and `"0x04000"` are different tokens. `Integer` only comes
/// from JSON, where a number has a single decimal spelling.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RawToken {
    Text(SmolStr),
    Integer(u64),
}

impl RawToken {
    pub fn to_literal(&self) -> SmolStr {
        match self {
            RawToken::Text(text) => text.clone(),
            RawToken::Integer(value) => SmolStr::new(value.to_string()),
        }
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawToken::Text(text) => f.write_str(text),
            RawToken::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// A datapoint default as written: a scalar or a nested key/value mapping.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Nested(IndexMap<String, RawValue>),
}
