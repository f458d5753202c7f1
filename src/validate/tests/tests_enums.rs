#![allow(clippy::unwrap_used)]

use super::raw;
use crate::base::ModelConfig;
use crate::model::{Enum, EnumValue, RawEnum};
use crate::validate::{EnumError, validate_enums};
use rstest::rstest;
use serde_json::json;

fn check(value: serde_json::Value) -> Result<Vec<Enum>, EnumError> {
    let enums: Vec<RawEnum> = raw(value);
    validate_enums(enums, ModelConfig::global())
}

#[test]
fn test_auto_id_keeps_declaration_order() {
    let enums = check(json!([
        {"name": "Status", "type": "uint32_t", "values": ["Booting", "Starting"], "autoId": true}
    ]))
    .unwrap();
    assert!(enums[0].auto_id);
    assert_eq!(
        enums[0].values,
        vec![EnumValue::auto("Booting"), EnumValue::auto("Starting")]
    );
}

#[test]
fn test_explicit_values_keep_declaration_order() {
    let enums = check(json!([{
        "name": "ErrorStates", "type": "uint32_t", "autoId": false,
        "values": [{"None": 0}, {"Warn": 4}, {"Info": 1}, {"Fatal": 10}]
    }]))
    .unwrap();
    assert!(!enums[0].auto_id);
    assert_eq!(
        enums[0].values,
        vec![
            EnumValue::explicit("None", 0),
            EnumValue::explicit("Warn", 4),
            EnumValue::explicit("Info", 1),
            EnumValue::explicit("Fatal", 10),
        ]
    );
}

#[test]
fn test_missing_auto_id_means_explicit() {
    let enums = check(json!([
        {"name": "Mode", "type": "uint8_t", "values": [{"Off": 0}, {"On": 1}]}
    ]))
    .unwrap();
    assert!(!enums[0].auto_id);
    assert_eq!(enums[0].values[1], EnumValue::explicit("On", 1));
}

#[rstest]
#[case(json!({"name": "Status", "type": "uint32_t", "values": ["Booting"], "autoId": false}))]
#[case(json!({"name": "Status", "type": "uint32_t", "values": ["Booting"]}))]
#[case(json!({"name": "Status", "type": "uint32_t", "values": [{"Off": 0}, "Booting"]}))]
fn test_label_without_auto_id(#[case] decl: serde_json::Value) {
    let err = check(json!([decl])).unwrap_err();
    assert_eq!(err, EnumError::AutoIdMissing { name: "Status".into() });
    assert!(err.to_string().contains("autoId is missing and only value was given"));
}

#[rstest]
#[case(json!({"name": "Status", "type": "uint32_t", "values": [{"Booting": 0}], "autoId": true}))]
#[case(json!({"name": "Status", "type": "uint32_t", "values": ["Booting", {"Starting": 1}], "autoId": true}))]
#[case(json!({"name": "Status", "type": "uint32_t", "values": [1], "autoId": true}))]
fn test_auto_id_requires_labels(#[case] decl: serde_json::Value) {
    let err = check(json!([decl])).unwrap_err();
    assert_eq!(err, EnumError::AutoIdExpectsLabels { name: "Status".into() });
}

#[rstest]
#[case(json!({"name": "Status", "type": "uint32_t", "values": [{"A": 0, "B": 1}]}))]
#[case(json!({"name": "Status", "type": "uint32_t", "values": [{}]}))]
#[case(json!({"name": "Status", "type": "uint32_t", "values": [3]}))]
fn test_malformed_explicit_value(#[case] decl: serde_json::Value) {
    let err = check(json!([decl])).unwrap_err();
    assert_eq!(
        err,
        EnumError::MalformedValue {
            name: "Status".into(),
            index: 0,
        }
    );
}

#[test]
fn test_empty_values_accepted() {
    let enums = check(json!([
        {"name": "Empty", "type": "uint32_t", "values": [], "autoId": true},
        {"name": "Other", "type": "uint32_t"}
    ]))
    .unwrap();
    assert!(enums.iter().all(|e| e.values.is_empty()));
}

#[rstest]
#[case("Status", "status")]
#[case("Status", "STATUS")]
#[case("Status", "  Status ")]
fn test_duplicate_name_case_insensitive(#[case] first: &str, #[case] second: &str) {
    let err = check(json!([
        {"name": first, "type": "uint32_t", "values": ["A"], "autoId": true},
        {"name": second, "type": "uint32_t", "values": ["B"], "autoId": true}
    ]))
    .unwrap_err();
    assert!(matches!(err, EnumError::Duplicate { .. }));
}

#[test]
fn test_name_is_trimmed() {
    let enums = check(json!([{"name": " Status ", "type": "uint8_t", "autoId": true}])).unwrap();
    assert_eq!(enums[0].name, "Status");
}

#[test]
fn test_unsupported_type() {
    let err = check(json!([
        {"name": "Status", "type": "uint32", "values": ["Booting"], "autoId": true}
    ]))
    .unwrap_err();
    assert_eq!(
        err,
        EnumError::UnsupportedBaseType {
            name: "Status".into(),
            base_type: "uint32".into(),
        }
    );
}
