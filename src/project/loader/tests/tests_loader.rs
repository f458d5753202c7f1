#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::project::loader::{
    Format, LoadError, ParseError, collect_fragment_paths, load_document, load_fragments, load_model,
    parse_document,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GROUPS_JSON: &str = r#"{
    "Groups": [{"name": "DefaultGroup", "persistence": "None", "baseId": "0x4000"}]
}"#;

const DATAPOINTS_YAML: &str = r#"
Datapoints:
  - name: temp
    group: DefaultGroup
    id: 1
    type: float
    access: READWRITE
    default: 21.5
"#;

#[test]
fn test_format_from_path() {
    assert_eq!(Format::from_path(Path::new("model.json")), Some(Format::Json));
    assert_eq!(Format::from_path(Path::new("model.yaml")), Some(Format::Yaml));
    assert_eq!(Format::from_path(Path::new("model.yml")), Some(Format::Yaml));
    assert_eq!(Format::from_path(Path::new("model.txt")), None);
    assert_eq!(Format::from_path(Path::new("model")), None);
}

#[test]
fn test_parse_json_document() {
    let doc = parse_document(GROUPS_JSON, Format::Json).unwrap();
    assert_eq!(doc.groups.len(), 1);
    assert!(doc.datapoints.is_empty());
}

#[test]
fn test_parse_yaml_document() {
    let doc = parse_document(DATAPOINTS_YAML, Format::Yaml).unwrap();
    assert_eq!(doc.datapoints.len(), 1);
    assert_eq!(doc.datapoints[0].id, 1);
}

#[test]
fn test_parse_whitespace_only() {
    let doc = parse_document("  \n\t", Format::Yaml).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_parse_structurally_invalid() {
    let result = parse_document(r#"{"Groups": [{"name": "G"}]}"#, Format::Json);
    assert!(result.is_err());
}

#[test]
fn test_load_document_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.txt");
    fs::write(&path, GROUPS_JSON).unwrap();

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat(_)));
}

#[test]
fn test_load_document_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_document(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_load_document_parse_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_collect_fragment_paths_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("b.json"), "{}").unwrap();
    fs::write(dir.path().join("a.yaml"), "").unwrap();
    fs::write(dir.path().join("README.md"), "docs").unwrap();
    fs::write(dir.path().join("nested/c.yml"), "").unwrap();

    let paths = collect_fragment_paths(dir.path()).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(names, vec!["a.yaml", "b.json", "nested/c.yml"]);
}

#[test]
fn test_collect_fragment_paths_not_a_directory() {
    let dir = TempDir::new().unwrap();
    let err = collect_fragment_paths(&dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, LoadError::NotADirectory(_)));
}

#[test]
fn test_load_fragments_merges_in_path_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("10_groups.json"), GROUPS_JSON).unwrap();
    fs::write(dir.path().join("20_datapoints.yaml"), DATAPOINTS_YAML).unwrap();
    fs::write(
        dir.path().join("30_more.json"),
        r#"{"Datapoints": [{"name": "pressure", "group": "DefaultGroup", "id": 2, "type": "double", "access": "READONLY"}]}"#,
    )
    .unwrap();

    let doc = load_fragments(dir.path()).unwrap();
    assert_eq!(doc.groups.len(), 1);
    let names: Vec<_> = doc.datapoints.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["temp", "pressure"]);
}

#[test]
fn test_load_fragments_keeps_duplicates_for_validation() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), GROUPS_JSON).unwrap();
    fs::write(dir.path().join("b.json"), GROUPS_JSON).unwrap();

    let doc = load_fragments(dir.path()).unwrap();
    assert_eq!(doc.groups.len(), 2);
}

#[test]
fn test_load_fragments_empty_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "nothing").unwrap();
    let err = load_fragments(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Empty(_)));
}

#[test]
fn test_load_fragments_fails_on_any_bad_fragment() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), GROUPS_JSON).unwrap();
    fs::write(dir.path().join("b.json"), "[1, 2").unwrap();
    assert!(load_fragments(dir.path()).is_err());
}

#[test]
fn test_load_model_dispatches() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("model.json");
    fs::write(&file, GROUPS_JSON).unwrap();

    assert_eq!(load_model(&file).unwrap().groups.len(), 1);
    assert_eq!(load_model(dir.path()).unwrap().groups.len(), 1);
}

#[test]
fn test_parse_yaml_rejects_unquoted_base_id() {
    let yaml = "Groups:\n  - {name: A, persistence: None, baseId: 0x4000}\n  - {name: B, persistence: None, baseId: 0x04000}\n";
    let err = parse_document(yaml, Format::Yaml).unwrap_err();
    assert!(matches!(err, ParseError::UnquotedBaseId { group } if group == "A"));
}

#[test]
fn test_parse_yaml_quoted_base_id_kept_verbatim() {
    let yaml = "Groups:\n  - {name: A, persistence: None, baseId: \"0x04000\"}\n";
    let doc = parse_document(yaml, Format::Yaml).unwrap();
    assert_eq!(doc.groups[0].base_id.to_literal(), "0x04000");
}

#[test]
fn test_parse_json_integer_base_id() {
    let doc = parse_document(
        r#"{"Groups": [{"name": "A", "persistence": "None", "baseId": 16384}]}"#,
        Format::Json,
    )
    .unwrap();
    assert_eq!(doc.groups[0].base_id.to_literal(), "16384");
}
