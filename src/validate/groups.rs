use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::error::GroupError;
use super::normalize::parse_version;
use crate::base::Persistence;
use crate::model::{Group, RawGroup};

/// Validate persistence groups.
///
/// `baseId` uniqueness compares the literal token, so `"0x4000"` and
/// `"0x04000"` do not collide.
pub fn validate_groups(raw: Vec<RawGroup>) -> Result<Vec<Group>, GroupError> {
    let mut seen = FxHashSet::default();
    let mut base_ids = FxHashSet::default();
    let mut groups = Vec::with_capacity(raw.len());

    for decl in raw {
        if !seen.insert(decl.name.clone()) {
            return Err(GroupError::Duplicate { name: decl.name });
        }
        let Ok(persistence) = decl.persistence.parse::<Persistence>() else {
            return Err(GroupError::UnsupportedPersistence {
                name: decl.name,
                persistence: decl.persistence,
            });
        };
        let base_id = decl.base_id.to_literal();
        if !base_ids.insert(base_id.clone()) {
            return Err(GroupError::DuplicateBaseId {
                name: decl.name,
                base_id,
            });
        }
        let version = match parse_version(decl.version.as_deref()) {
            Ok(version) => version,
            Err(source) => {
                return Err(GroupError::InvalidVersion {
                    name: decl.name,
                    source,
                });
            }
        };

        trace!(name = %decl.name, %base_id, %persistence, "group validated");
        groups.push(Group {
            name: decl.name,
            persistence,
            base_id,
            version,
            allow_upgrade: decl.allow_upgrade.unwrap_or(false),
            description: decl.description,
        });
    }

    debug!(count = groups.len(), "groups validated");
    Ok(groups)
}
