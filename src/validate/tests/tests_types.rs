#![allow(clippy::unwrap_used)]

use super::raw;
use crate::base::ModelConfig;
use crate::model::{Number, RawType};
use crate::validate::{TypeError, validate_types};
use rstest::rstest;
use serde_json::json;

fn check(value: serde_json::Value) -> Result<Vec<crate::model::CustomType>, TypeError> {
    let types: Vec<RawType> = raw(value);
    validate_types(types, ModelConfig::global())
}

#[test]
fn test_correct_type() {
    let types = check(json!([{"name": "Temperature", "type": "uint32_t"}])).unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name, "Temperature");
    assert_eq!(types[0].base_type, "uint32_t");
    assert_eq!(types[0].min, None);
    assert_eq!(types[0].max, None);
}

#[rstest]
#[case(json!({"name": "Temperature", "type": "uint32_t", "min": 12}))]
#[case(json!({"name": "Temperature", "type": "uint32_t", "max": 12}))]
#[case(json!({"name": "Temperature", "type": "uint32_t", "min": 2, "max": 12}))]
#[case(json!({"name": "Temperature", "type": "float", "min": -0.5, "max": 0.5}))]
#[case(json!({"name": "Temperature", "type": "float", "min": 1, "max": 1.5}))]
fn test_bounds_accepted(#[case] decl: serde_json::Value) {
    assert!(check(json!([decl])).is_ok());
}

#[test]
fn test_min_equals_max() {
    let err = check(json!([{"name": "Temp", "type": "uint32_t", "min": 12, "max": 12}])).unwrap_err();
    assert_eq!(
        err,
        TypeError::EqualBounds {
            name: "Temp".into(),
            value: Number::Integer(12),
        }
    );
    assert!(err.to_string().contains("min and max are equal"));
}

#[test]
fn test_mixed_equal_bounds() {
    let err = check(json!([{"name": "Temp", "type": "float", "min": 3, "max": 3.0}])).unwrap_err();
    assert!(matches!(err, TypeError::EqualBounds { .. }));
}

#[test]
fn test_min_greater_than_max() {
    let err = check(json!([{"name": "Temperature", "type": "uint32_t", "min": 22, "max": 12}])).unwrap_err();
    assert!(matches!(err, TypeError::InvertedBounds { .. }));
}

#[test]
fn test_unsupported_base_type() {
    let err = check(json!([{"name": "Temperature", "type": "uint"}])).unwrap_err();
    assert_eq!(
        err,
        TypeError::UnsupportedBaseType {
            name: "Temperature".into(),
            base_type: "uint".into(),
        }
    );
}

#[test]
fn test_missing_base_type() {
    let err = check(json!([{"name": "Temperature"}])).unwrap_err();
    assert!(matches!(err, TypeError::MissingBaseType { name } if name == "Temperature"));
}

#[test]
fn test_duplicate_name() {
    let err = check(json!([
        {"name": "Temperature", "type": "uint32_t"},
        {"name": "Temperature", "type": "uint16_t"}
    ]))
    .unwrap_err();
    assert!(matches!(err, TypeError::Duplicate { name } if name == "Temperature"));
}

#[test]
fn test_names_are_case_sensitive() {
    let types = check(json!([
        {"name": "Temperature", "type": "uint32_t"},
        {"name": "temperature", "type": "uint16_t"}
    ]))
    .unwrap();
    assert_eq!(types.len(), 2);
}

#[test]
fn test_all_base_types() {
    for base in ModelConfig::global().base_types() {
        assert!(check(json!([{"name": "Temperature", "type": base}])).is_ok(), "{base}");
    }
}

#[test]
fn test_first_violation_wins() {
    let err = check(json!([
        {"name": "A", "type": "uint"},
        {"name": "B", "type": "uint32_t", "min": 3, "max": 1}
    ]))
    .unwrap_err();
    assert!(matches!(err, TypeError::UnsupportedBaseType { .. }));
}
