//! Literal values: numbers and normalized parameters.

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use smol_str::SmolStr;

/// A numeric literal from the model.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    /// Numeric comparison across integer and float literals.
    ///
    /// Returns `None` only when a float side is NaN.
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }

    /// Render as a source literal, appending `suffix` to floats only.
    pub fn to_literal(&self, suffix: &str) -> String {
        match self {
            Number::Integer(value) => value.to_string(),
            Number::Float(value) => format!("{value:?}{suffix}"),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value:?}"),
        }
    }
}

/// A named value; nested values make up structured initializers.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: SmolStr,
    pub value: ParameterValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    Label(SmolStr),
    Number(Number),
    Nested(Vec<Parameter>),
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, value: ParameterValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl ParameterValue {
    /// Look up a direct child of a nested value.
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        match self {
            ParameterValue::Nested(children) => children
                .iter()
                .find(|p| p.name == name)
                .map(|p| &p.value),
            _ => None,
        }
    }
}
