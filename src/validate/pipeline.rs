//! Typestate pipeline.
//!
//! ```text
//! Loaded ─validate_types→ TypesValidated ─validate_enums→ EnumsValidated
//!   ─validate_structs→ StructsValidated ─validate_groups→ GroupsValidated
//!   ─validate_datapoints→ DatapointsValidated ─build_group_index→ ValidatedModel
//! ```
//!
//! Each transition only exists on the previous stage's type, so the
//! datapoint stage cannot run before the type, enum and struct universes
//! exist. Any error ends the run.

use std::mem;

use tracing::info;

use super::datapoints::validate_datapoints;
use super::enums::validate_enums;
use super::error::ModelError;
use super::group_index::build_group_index;
use super::groups::validate_groups;
use super::structs::validate_structs;
use super::types::validate_types;
use super::universe::TypeUniverse;
use crate::base::ModelConfig;
use crate::model::{CustomType, Datapoint, Enum, Group, RawDocument, Struct, ValidatedModel};

pub struct Pipeline<'c, S> {
    config: &'c ModelConfig,
    pending: RawDocument,
    state: S,
}

pub struct Loaded;

pub struct TypesValidated {
    types: Vec<CustomType>,
}

pub struct EnumsValidated {
    types: Vec<CustomType>,
    enums: Vec<Enum>,
}

pub struct StructsValidated {
    types: Vec<CustomType>,
    enums: Vec<Enum>,
    structs: Vec<Struct>,
}

pub struct GroupsValidated {
    types: Vec<CustomType>,
    enums: Vec<Enum>,
    structs: Vec<Struct>,
    groups: Vec<Group>,
}

pub struct DatapointsValidated {
    types: Vec<CustomType>,
    enums: Vec<Enum>,
    structs: Vec<Struct>,
    groups: Vec<Group>,
    datapoints: Vec<Datapoint>,
}

impl<S> Pipeline<'_, S> {
    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<'c> Pipeline<'c, Loaded> {
    pub fn new(document: RawDocument, config: &'c ModelConfig) -> Self {
        Self {
            config,
            pending: document,
            state: Loaded,
        }
    }

    pub fn validate_types(self) -> Result<Pipeline<'c, TypesValidated>, ModelError> {
        let Pipeline {
            config,
            mut pending,
            state: Loaded,
        } = self;
        let types = validate_types(mem::take(&mut pending.types), config)?;
        Ok(Pipeline {
            config,
            pending,
            state: TypesValidated { types },
        })
    }
}

impl<'c> Pipeline<'c, TypesValidated> {
    pub fn validate_enums(self) -> Result<Pipeline<'c, EnumsValidated>, ModelError> {
        let Pipeline {
            config,
            mut pending,
            state,
        } = self;
        let enums = validate_enums(mem::take(&mut pending.enums), config)?;
        Ok(Pipeline {
            config,
            pending,
            state: EnumsValidated {
                types: state.types,
                enums,
            },
        })
    }
}

impl<'c> Pipeline<'c, EnumsValidated> {
    pub fn validate_structs(self) -> Result<Pipeline<'c, StructsValidated>, ModelError> {
        let Pipeline {
            config,
            mut pending,
            state,
        } = self;
        let structs = validate_structs(mem::take(&mut pending.structs), config)?;
        Ok(Pipeline {
            config,
            pending,
            state: StructsValidated {
                types: state.types,
                enums: state.enums,
                structs,
            },
        })
    }
}

impl<'c> Pipeline<'c, StructsValidated> {
    pub fn validate_groups(self) -> Result<Pipeline<'c, GroupsValidated>, ModelError> {
        let Pipeline {
            config,
            mut pending,
            state,
        } = self;
        let groups = validate_groups(mem::take(&mut pending.groups))?;
        Ok(Pipeline {
            config,
            pending,
            state: GroupsValidated {
                types: state.types,
                enums: state.enums,
                structs: state.structs,
                groups,
            },
        })
    }
}

impl<'c> Pipeline<'c, GroupsValidated> {
    pub fn validate_datapoints(self) -> Result<Pipeline<'c, DatapointsValidated>, ModelError> {
        let Pipeline {
            config,
            mut pending,
            state,
        } = self;
        let datapoints = validate_datapoints(
            mem::take(&mut pending.datapoints),
            &state.universe(config),
        )?;
        Ok(Pipeline {
            config,
            pending,
            state: DatapointsValidated {
                types: state.types,
                enums: state.enums,
                structs: state.structs,
                groups: state.groups,
                datapoints,
            },
        })
    }
}

impl Pipeline<'_, DatapointsValidated> {
    pub fn build_group_index(self) -> ValidatedModel {
        let DatapointsValidated {
            types,
            enums,
            structs,
            groups,
            datapoints,
        } = self.state;
        let group_index = build_group_index(&datapoints);
        info!(
            types = types.len(),
            enums = enums.len(),
            structs = structs.len(),
            groups = groups.len(),
            datapoints = datapoints.len(),
            "model validated"
        );
        ValidatedModel {
            types,
            enums,
            structs,
            groups,
            datapoints,
            group_index,
        }
    }
}

impl TypesValidated {
    pub fn types(&self) -> &[CustomType] {
        &self.types
    }
}

impl EnumsValidated {
    pub fn types(&self) -> &[CustomType] {
        &self.types
    }

    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }
}

impl StructsValidated {
    pub fn structs(&self) -> &[Struct] {
        &self.structs
    }
}

impl GroupsValidated {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The universe the datapoint stage will resolve against.
    pub fn universe<'a>(&'a self, config: &'a ModelConfig) -> TypeUniverse<'a> {
        TypeUniverse::new(config, &self.types, &self.enums, &self.structs)
    }
}

impl DatapointsValidated {
    pub fn datapoints(&self) -> &[Datapoint] {
        &self.datapoints
    }
}

/// Run every stage in order.
pub fn validate(document: RawDocument, config: &ModelConfig) -> Result<ValidatedModel, ModelError> {
    Ok(Pipeline::new(document, config)
        .validate_types()?
        .validate_enums()?
        .validate_structs()?
        .validate_groups()?
        .validate_datapoints()?
        .build_group_index())
}
