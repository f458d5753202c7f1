use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::{SmolStr, format_smolstr};
use tracing::{debug, trace};

use super::error::DatapointError;
use super::normalize::{build_default, parse_version};
use super::universe::TypeUniverse;
use crate::base::Access;
use crate::model::{Datapoint, RawDatapoint};

/// `namespace::name`, or the bare name when the namespace is empty.
pub fn qualify(namespace: &str, name: &str) -> SmolStr {
    if namespace.is_empty() {
        SmolStr::new(name)
    } else {
        format_smolstr!("{namespace}::{name}")
    }
}

/// Validate datapoints against the resolved type universe.
///
/// Qualified names are unique across the whole model; ids are unique per
/// group only. The absolute address (`baseId + id`) is not computed here.
pub fn validate_datapoints(
    raw: Vec<RawDatapoint>,
    universe: &TypeUniverse<'_>,
) -> Result<Vec<Datapoint>, DatapointError> {
    let config = universe.config();
    let mut seen = FxHashSet::default();
    let mut ids_by_group: FxHashMap<SmolStr, FxHashSet<u32>> = FxHashMap::default();
    let mut datapoints = Vec::with_capacity(raw.len());

    for decl in raw {
        let namespace = decl.namespace.unwrap_or_default();
        let qualified_name = qualify(&namespace, &decl.name);

        if !seen.insert(qualified_name.clone()) {
            return Err(DatapointError::Duplicate {
                name: qualified_name,
            });
        }
        let Ok(access) = decl.access.parse::<Access>() else {
            return Err(DatapointError::UnsupportedAccess {
                name: qualified_name,
                access: decl.access,
            });
        };
        let Some(type_kind) = universe.resolve(&decl.ty) else {
            return Err(DatapointError::UnknownType {
                name: qualified_name,
                ty: decl.ty,
            });
        };

        let default = decl
            .default
            .map(|raw| build_default(raw, universe.scalar_type(&decl.ty), config));

        if !ids_by_group
            .entry(decl.group.clone())
            .or_default()
            .insert(decl.id)
        {
            return Err(DatapointError::DuplicateId {
                name: qualified_name,
                id: decl.id,
                group: decl.group,
            });
        }

        let array_size = match decl.array_size {
            None => 0,
            Some(0) => {
                return Err(DatapointError::ZeroArraySize {
                    name: qualified_name,
                });
            }
            Some(size) => size,
        };

        let version = match parse_version(decl.version.as_deref()) {
            Ok(version) => version,
            Err(source) => {
                return Err(DatapointError::InvalidVersion {
                    name: qualified_name,
                    source,
                });
            }
        };

        trace!(name = %qualified_name, group = %decl.group, id = decl.id, "datapoint validated");
        datapoints.push(Datapoint {
            name: decl.name,
            namespace,
            qualified_name,
            group: decl.group,
            id: decl.id,
            ty: decl.ty,
            type_kind,
            access,
            version,
            array_size,
            default,
            description: decl.description,
            allow_upgrade: decl.allow_upgrade.unwrap_or(false),
        });
    }

    debug!(count = datapoints.len(), "datapoints validated");
    Ok(datapoints)
}
