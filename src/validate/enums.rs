use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::error::EnumError;
use crate::base::ModelConfig;
use crate::model::{Enum, EnumValue, RawEnum, RawEnumValue};

/// Validate enum declarations and normalize their values.
///
/// Names collide case-insensitively after trimming. Values keep their
/// declaration order.
pub fn validate_enums(raw: Vec<RawEnum>, config: &ModelConfig) -> Result<Vec<Enum>, EnumError> {
    let mut seen = FxHashSet::default();
    let mut enums = Vec::with_capacity(raw.len());

    for decl in raw {
        let name = decl.name.trim();
        if !seen.insert(name.to_lowercase()) {
            return Err(EnumError::Duplicate { name: name.into() });
        }
        if !config.is_base_type(&decl.base_type) {
            return Err(EnumError::UnsupportedBaseType {
                name: name.into(),
                base_type: decl.base_type,
            });
        }

        let auto_id = decl.auto_id.unwrap_or(false);
        let values = if auto_id {
            auto_values(name, decl.values)?
        } else {
            explicit_values(name, decl.values)?
        };

        trace!(name, auto_id, values = values.len(), "enum validated");
        enums.push(Enum {
            name: name.into(),
            base_type: decl.base_type,
            auto_id,
            values,
        });
    }

    debug!(count = enums.len(), "enums validated");
    Ok(enums)
}

fn auto_values(name: &str, values: Vec<RawEnumValue>) -> Result<Vec<EnumValue>, EnumError> {
    values
        .into_iter()
        .map(|value| match value {
            RawEnumValue::Label(label) => Ok(EnumValue::auto(label)),
            _ => Err(EnumError::AutoIdExpectsLabels { name: name.into() }),
        })
        .collect()
}

fn explicit_values(name: &str, values: Vec<RawEnumValue>) -> Result<Vec<EnumValue>, EnumError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            RawEnumValue::Mapping(mapping) if mapping.len() == 1 => {
                let (label, ordinal) = mapping
                    .into_iter()
                    .next()
                    .ok_or_else(|| EnumError::MalformedValue {
                        name: name.into(),
                        index,
                    })?;
                Ok(EnumValue::explicit(label, ordinal))
            }
            RawEnumValue::Label(_) => Err(EnumError::AutoIdMissing { name: name.into() }),
            _ => Err(EnumError::MalformedValue {
                name: name.into(),
                index,
            }),
        })
        .collect()
}
