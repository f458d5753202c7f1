use std::cmp::Ordering;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::error::TypeError;
use crate::base::ModelConfig;
use crate::model::{CustomType, RawType};

/// Validate custom type declarations.
pub fn validate_types(
    raw: Vec<RawType>,
    config: &ModelConfig,
) -> Result<Vec<CustomType>, TypeError> {
    let mut seen = FxHashSet::default();
    let mut types = Vec::with_capacity(raw.len());

    for decl in raw {
        if !seen.insert(decl.name.clone()) {
            return Err(TypeError::Duplicate { name: decl.name });
        }
        let Some(base_type) = decl.base_type else {
            return Err(TypeError::MissingBaseType { name: decl.name });
        };
        if !config.is_base_type(&base_type) {
            return Err(TypeError::UnsupportedBaseType {
                name: decl.name,
                base_type,
            });
        }

        if let (Some(min), Some(max)) = (decl.min, decl.max) {
            match min.compare(&max) {
                Some(Ordering::Less) => {}
                Some(Ordering::Equal) => {
                    return Err(TypeError::EqualBounds {
                        name: decl.name,
                        value: min,
                    });
                }
                Some(Ordering::Greater) => {
                    return Err(TypeError::InvertedBounds {
                        name: decl.name,
                        min,
                        max,
                    });
                }
                None => {
                    return Err(TypeError::IncomparableBounds {
                        name: decl.name,
                        min,
                        max,
                    });
                }
            }
        }

        trace!(name = %decl.name, base = %base_type, "custom type validated");
        types.push(CustomType {
            name: decl.name,
            base_type,
            min: decl.min,
            max: decl.max,
        });
    }

    debug!(count = types.len(), "types validated");
    Ok(types)
}
