use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::error::StructError;
use crate::base::ModelConfig;
use crate::model::{Field, RawField, RawStruct, Struct};

/// Validate struct declarations.
///
/// Fields are reordered by name so the generated layout does not depend
/// on declaration order. A field may reference any struct of the document,
/// including ones declared later. Reference cycles are not detected.
pub fn validate_structs(
    raw: Vec<RawStruct>,
    config: &ModelConfig,
) -> Result<Vec<Struct>, StructError> {
    let declared: FxHashSet<SmolStr> = raw.iter().map(|s| s.name.clone()).collect();
    let mut seen = FxHashSet::default();
    let mut structs = Vec::with_capacity(raw.len());

    for decl in raw {
        if !seen.insert(decl.name.clone()) {
            return Err(StructError::Duplicate { name: decl.name });
        }
        if decl.parameter.is_empty() {
            return Err(StructError::NoFields { name: decl.name });
        }

        let mut fields = Vec::with_capacity(decl.parameter.len());
        for (index, raw) in decl.parameter.into_iter().enumerate() {
            let Some(field) = into_field(raw) else {
                return Err(StructError::MalformedField {
                    name: decl.name,
                    index,
                });
            };
            fields.push(field);
        }
        fields.sort_by(|a, b| a.name.cmp(&b.name));

        let mut field_names = FxHashSet::default();
        for field in &fields {
            if !field_names.insert(field.name.as_str()) {
                return Err(StructError::DuplicateField {
                    name: decl.name,
                    field: field.name.clone(),
                });
            }
            if !config.is_base_type(&field.ty) && !declared.contains(&field.ty) {
                return Err(StructError::UnknownFieldType {
                    name: decl.name,
                    field: field.name.clone(),
                    ty: field.ty.clone(),
                });
            }
        }

        trace!(name = %decl.name, fields = fields.len(), "struct validated");
        structs.push(Struct {
            name: decl.name,
            fields,
        });
    }

    debug!(count = structs.len(), "structs validated");
    Ok(structs)
}

fn into_field(raw: RawField) -> Option<Field> {
    match raw {
        RawField::Named { name, ty } => Some(Field { name, ty }),
        RawField::Mapping(map) if map.len() == 1 => {
            let (name, ty) = map.into_iter().next()?;
            Some(Field { name, ty })
        }
        RawField::Mapping(_) => None,
    }
}
