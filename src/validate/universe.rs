use rustc_hash::{FxHashMap, FxHashSet};

use crate::base::ModelConfig;
use crate::model::{CustomType, Enum, Struct, TypeKind};

/// Every type name a datapoint may reference.
///
/// Built from the outputs of the type, enum and struct stages; holding one
/// proves those stages have completed.
#[derive(Debug)]
pub struct TypeUniverse<'a> {
    config: &'a ModelConfig,
    structs: FxHashSet<&'a str>,
    enums: FxHashSet<&'a str>,
    /// Custom type name to its base type.
    custom: FxHashMap<&'a str, &'a str>,
}

impl<'a> TypeUniverse<'a> {
    pub fn new(
        config: &'a ModelConfig,
        types: &'a [CustomType],
        enums: &'a [Enum],
        structs: &'a [Struct],
    ) -> Self {
        Self {
            config,
            structs: structs.iter().map(|s| s.name.as_str()).collect(),
            enums: enums.iter().map(|e| e.name.as_str()).collect(),
            custom: types
                .iter()
                .map(|t| (t.name.as_str(), t.base_type.as_str()))
                .collect(),
        }
    }

    /// Resolve a type name. Base types win, then structs, enums and
    /// custom types.
    pub fn resolve(&self, ty: &str) -> Option<TypeKind> {
        if self.config.is_base_type(ty) {
            Some(TypeKind::Base)
        } else if self.structs.contains(ty) {
            Some(TypeKind::Struct)
        } else if self.enums.contains(ty) {
            Some(TypeKind::Enum)
        } else if self.custom.contains_key(ty) {
            Some(TypeKind::Custom)
        } else {
            None
        }
    }

    /// The type whose literal suffix applies to values of `ty`: the base
    /// type of a custom type, otherwise `ty` itself.
    pub fn scalar_type<'t>(&self, ty: &'t str) -> &'t str
    where
        'a: 't,
    {
        match self.resolve(ty) {
            Some(TypeKind::Custom) => self.custom.get(ty).copied().unwrap_or(ty),
            _ => ty,
        }
    }

    pub fn config(&self) -> &'a ModelConfig {
        self.config
    }
}
