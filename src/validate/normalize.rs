//! Literal normalization shared by the group and datapoint stages.

use std::fmt::Write;

use crate::base::ModelConfig;
use crate::base::config::FLOAT_TYPE;
use crate::model::{
    DefaultValue, Number, Parameter, ParameterValue, RawValue, Version, VersionFormatError,
};

pub(crate) fn parse_version(raw: Option<&str>) -> Result<Option<Version>, VersionFormatError> {
    raw.map(str::parse).transpose()
}

/// Convert a raw default into a parameter tree.
///
/// Keys of nested mappings are sorted alphabetically at every level.
pub fn normalize_value(raw: RawValue) -> ParameterValue {
    match raw {
        RawValue::Bool(flag) => ParameterValue::Label(if flag { "true" } else { "false" }.into()),
        RawValue::Integer(value) => ParameterValue::Number(Number::Integer(value)),
        RawValue::Float(value) => ParameterValue::Number(Number::Float(value)),
        RawValue::Text(text) => ParameterValue::Label(text.into()),
        RawValue::Nested(map) => {
            let mut entries: Vec<(String, RawValue)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            ParameterValue::Nested(
                entries
                    .into_iter()
                    .map(|(name, value)| Parameter::new(name, normalize_value(value)))
                    .collect(),
            )
        }
    }
}

/// Render a parameter tree as a designated initializer.
///
/// `{.a=1, .b={.c=2.5F}}`. Float leaves inside a nested value get the
/// `float` suffix; a float scalar gets `scalar_suffix`.
pub fn render_literal(value: &ParameterValue, scalar_suffix: &str, config: &ModelConfig) -> String {
    match value {
        ParameterValue::Nested(_) => {
            let mut out = String::new();
            write_nested(&mut out, value, config.literal_suffix(FLOAT_TYPE));
            out
        }
        ParameterValue::Label(label) => label.to_string(),
        ParameterValue::Number(number) => number.to_literal(scalar_suffix),
    }
}

fn write_nested(out: &mut String, value: &ParameterValue, float_suffix: &str) {
    match value {
        ParameterValue::Nested(children) => {
            out.push('{');
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, ".{}=", child.name);
                write_nested(out, &child.value, float_suffix);
            }
            out.push('}');
        }
        ParameterValue::Label(label) => out.push_str(label),
        ParameterValue::Number(number) => out.push_str(&number.to_literal(float_suffix)),
    }
}

/// Normalize and render a datapoint default of type `ty`.
pub(crate) fn build_default(raw: RawValue, ty: &str, config: &ModelConfig) -> DefaultValue {
    let value = normalize_value(raw);
    let literal = render_literal(&value, config.literal_suffix(ty), config);
    DefaultValue { value, literal }
}
