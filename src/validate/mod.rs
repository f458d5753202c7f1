//! # Validation
//!
//! Semantic validation and model resolution. Each stage is a pure
//! `Raw* → validated` transformation; [`Pipeline`] chains them in the only
//! legal order:
//!
//! ```text
//! types → enums → structs → groups → datapoints → group index
//! ```
//!
//! Structural shape is guaranteed by deserialization; the stages only
//! enforce business rules (uniqueness, type resolution, literal
//! normalization). The first violation aborts the run.

mod datapoints;
mod enums;
mod error;
mod group_index;
mod groups;
pub mod normalize;
mod pipeline;
mod structs;
mod types;
mod universe;

pub use datapoints::{qualify, validate_datapoints};
pub use enums::validate_enums;
pub use error::{DatapointError, EnumError, GroupError, ModelError, Stage, StructError, TypeError};
pub use group_index::build_group_index;
pub use groups::validate_groups;
pub use pipeline::{
    DatapointsValidated, EnumsValidated, GroupsValidated, Loaded, Pipeline, StructsValidated,
    TypesValidated, validate,
};
pub use structs::validate_structs;
pub use types::validate_types;
pub use universe::TypeUniverse;

#[cfg(test)]
mod tests;
