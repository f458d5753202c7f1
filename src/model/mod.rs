//! # Model
//!
//! Two representations of the same datalayer model:
//!
//! - [`raw`] - The merged document as authored, deserialized with serde.
//!   Nothing here has been checked beyond its shape.
//! - [`validated`] - Immutable, fully resolved entities produced by the
//!   validation pipeline and consumed by emitters.
//!
//! Literal values shared by both live in [`value`].

pub mod raw;
pub mod validated;
pub mod value;
mod version;

pub use raw::{
    RawDatapoint, RawDocument, RawEnum, RawEnumValue, RawField, RawGroup, RawStruct, RawToken,
    RawType, RawValue,
};
pub use validated::{
    CustomType, Datapoint, DefaultValue, Enum, EnumValue, Field, Group, GroupIndex, Struct,
    TypeKind, ValidatedModel,
};
pub use value::{Number, Parameter, ParameterValue};
pub use version::{Version, VersionFormatError};

pub type QualifiedName = smol_str::SmolStr;
