//! Validated model entities.
//!
//! Everything here is produced by [`crate::validate`] and never mutated
//! afterward. Emitters only read these types.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::value::{Number, ParameterValue};
use super::version::Version;
use crate::base::{Access, Persistence};

/// A named, optionally bounded alias over a base scalar type.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomType {
    pub name: SmolStr,
    pub base_type: SmolStr,
    pub min: Option<Number>,
    pub max: Option<Number>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enum {
    pub name: SmolStr,
    pub base_type: SmolStr,
    pub auto_id: bool,
    /// Declaration order; this is the enumerator emission order.
    pub values: Vec<EnumValue>,
}

/// An enumerator. `ordinal` is `None` for auto-numbered enums.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub label: SmolStr,
    pub ordinal: Option<i64>,
}

impl EnumValue {
    pub fn auto(label: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            ordinal: None,
        }
    }

    pub fn explicit(label: impl Into<SmolStr>, ordinal: i64) -> Self {
        Self {
            label: label.into(),
            ordinal: Some(ordinal),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Struct {
    pub name: SmolStr,
    /// Sorted by field name.
    pub fields: Vec<Field>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: SmolStr,
    pub ty: SmolStr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub name: SmolStr,
    pub persistence: Persistence,
    /// Literal token as written in the model.
    pub base_id: SmolStr,
    pub version: Option<Version>,
    pub allow_upgrade: bool,
    pub description: Option<String>,
}

/// Which name universe a datapoint type was resolved in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Base,
    Struct,
    Enum,
    Custom,
}

/// A default value: the normalized tree plus its rendered initializer.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultValue {
    pub value: ParameterValue,
    pub literal: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Datapoint {
    pub name: SmolStr,
    /// Empty when no namespace was given.
    pub namespace: SmolStr,
    pub qualified_name: SmolStr,
    pub group: SmolStr,
    pub id: u32,
    pub ty: SmolStr,
    pub type_kind: TypeKind,
    pub access: Access,
    pub version: Option<Version>,
    /// 0 for scalar datapoints.
    pub array_size: u32,
    pub default: Option<DefaultValue>,
    pub description: Option<String>,
    pub allow_upgrade: bool,
}

impl Datapoint {
    pub fn is_array(&self) -> bool {
        self.array_size > 0
    }
}

/// Group name to the qualified names of its datapoints, first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupIndex {
    entries: IndexMap<SmolStr, Vec<SmolStr>>,
}

impl GroupIndex {
    pub(crate) fn push(&mut self, group: &SmolStr, qualified_name: &SmolStr) {
        self.entries
            .entry(group.clone())
            .or_default()
            .push(qualified_name.clone());
    }

    pub fn get(&self, group: &str) -> Option<&[SmolStr]> {
        self.entries.get(group).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &[SmolStr])> {
        self.entries.iter().map(|(g, names)| (g, names.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The complete output of the validation pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedModel {
    pub types: Vec<CustomType>,
    pub enums: Vec<Enum>,
    pub structs: Vec<Struct>,
    pub groups: Vec<Group>,
    pub datapoints: Vec<Datapoint>,
    pub group_index: GroupIndex,
}

impl ValidatedModel {
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn datapoint(&self, qualified_name: &str) -> Option<&Datapoint> {
        self.datapoints
            .iter()
            .find(|dp| dp.qualified_name == qualified_name)
    }

    pub fn struct_by_name(&self, name: &str) -> Option<&Struct> {
        self.structs.iter().find(|s| s.name == name)
    }
}
