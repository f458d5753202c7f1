//! Error types for the validation pipeline.
//!
//! Each stage has its own error enum; [`ModelError`] is the closed union
//! handed to the caller. The first violation aborts the whole run.

use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

use crate::model::{Number, VersionFormatError};

/// Pipeline stage that raised an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Types,
    Enums,
    Structs,
    Groups,
    Datapoints,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Types => "type",
            Stage::Enums => "enum",
            Stage::Structs => "struct",
            Stage::Groups => "group",
            Stage::Datapoints => "datapoint",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("Type name '{name}' already defined, please check your model")]
    Duplicate { name: SmolStr },

    #[error("Type '{name}' has no base type")]
    MissingBaseType { name: SmolStr },

    #[error("Type '{name}' uses unsupported base type '{base_type}'")]
    UnsupportedBaseType { name: SmolStr, base_type: SmolStr },

    #[error("Type '{name}': min and max are equal ({value})")]
    EqualBounds { name: SmolStr, value: Number },

    #[error("Type '{name}': min {min} is greater than max {max}")]
    InvertedBounds {
        name: SmolStr,
        min: Number,
        max: Number,
    },

    #[error("Type '{name}': min {min} and max {max} cannot be compared")]
    IncomparableBounds {
        name: SmolStr,
        min: Number,
        max: Number,
    },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EnumError {
    #[error("Enum name '{name}' already defined, please check your model")]
    Duplicate { name: SmolStr },

    #[error("Enum type '{base_type}' of '{name}' is not supported")]
    UnsupportedBaseType { name: SmolStr, base_type: SmolStr },

    #[error("Enum '{name}': autoId is true but values are not string only")]
    AutoIdExpectsLabels { name: SmolStr },

    #[error("Enum '{name}': autoId is missing and only value was given")]
    AutoIdMissing { name: SmolStr },

    #[error("Enum '{name}': value #{index} must map exactly one label to an ordinal")]
    MalformedValue { name: SmolStr, index: usize },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StructError {
    #[error("Struct name '{name}' already defined, please check your model")]
    Duplicate { name: SmolStr },

    #[error("Struct '{name}' doesn't have any parameter defined")]
    NoFields { name: SmolStr },

    #[error("Struct '{name}': parameter {index} must map exactly one name to a type")]
    MalformedField { name: SmolStr, index: usize },

    #[error("Struct '{name}' defines parameter '{field}' more than once")]
    DuplicateField { name: SmolStr, field: SmolStr },

    #[error("Parameter type '{ty}' of '{name}::{field}' is not supported")]
    UnknownFieldType {
        name: SmolStr,
        field: SmolStr,
        ty: SmolStr,
    },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("Group name '{name}' already defined, please check your model")]
    Duplicate { name: SmolStr },

    #[error("Persistence type '{persistence}' of group '{name}' is not supported")]
    UnsupportedPersistence { name: SmolStr, persistence: SmolStr },

    #[error("Group baseId '{base_id}' of '{name}' already defined, please check your model")]
    DuplicateBaseId { name: SmolStr, base_id: SmolStr },

    #[error("Group '{name}': {source}")]
    InvalidVersion {
        name: SmolStr,
        #[source]
        source: VersionFormatError,
    },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DatapointError {
    #[error("Datapoint name '{name}' already defined, please check your model")]
    Duplicate { name: SmolStr },

    #[error("Datapoint access type '{access}' of '{name}' is not supported")]
    UnsupportedAccess { name: SmolStr, access: SmolStr },

    #[error("Datapoint type '{ty}' of '{name}' is not supported")]
    UnknownType { name: SmolStr, ty: SmolStr },

    #[error("Datapoint id '{id}' is already registered for group '{group}'")]
    DuplicateId {
        name: SmolStr,
        id: u32,
        group: SmolStr,
    },

    #[error("Datapoint '{name}': arraySize defined but size is 0")]
    ZeroArraySize { name: SmolStr },

    #[error("Datapoint '{name}': {source}")]
    InvalidVersion {
        name: SmolStr,
        #[source]
        source: VersionFormatError,
    },
}

/// First violation found by the pipeline, tagged with its stage.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("type validation failed: {0}")]
    Type(#[from] TypeError),

    #[error("enum validation failed: {0}")]
    Enum(#[from] EnumError),

    #[error("struct validation failed: {0}")]
    Struct(#[from] StructError),

    #[error("group validation failed: {0}")]
    Group(#[from] GroupError),

    #[error("datapoint validation failed: {0}")]
    Datapoint(#[from] DatapointError),
}

impl ModelError {
    pub fn stage(&self) -> Stage {
        match self {
            ModelError::Type(_) => Stage::Types,
            ModelError::Enum(_) => Stage::Enums,
            ModelError::Struct(_) => Stage::Structs,
            ModelError::Group(_) => Stage::Groups,
            ModelError::Datapoint(_) => Stage::Datapoints,
        }
    }
}
