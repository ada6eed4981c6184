use std::io::Write;

use quill_cli::cli::{inspect, read_resource, registry, roundtrip};
use tempfile::NamedTempFile;

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

#[test]
fn test_inspect_bundle_lists_entries() {
    let file = write_fixture(
        r#"{
            "resourceType": "Bundle",
            "id": "b1",
            "type": "collection",
            "entry": [
                {"resource": {"resourceType": "Patient", "id": "p1"}},
                {"resource": {"resourceType": "Banana", "id": "x"}},
                {"fullUrl": "urn:uuid:empty"}
            ]
        }"#,
    );
    let (_, resource) = read_resource(file.path()).unwrap();
    let report = inspect(&resource);
    assert!(report.contains("resourceType: Bundle"));
    assert!(report.contains("modeled: true"));
    assert!(report.contains("id: b1"));
    assert!(report.contains("[0] Patient id=p1"));
    assert!(report.contains("[1] Banana (unknown) id=x"));
    assert!(report.contains("[2] (no resource)"));
}

#[test]
fn test_inspect_contained() {
    let file = write_fixture(
        r#"{"resourceType":"Patient","contained":[{"resourceType":"Location","id":"l1"}]}"#,
    );
    let (_, resource) = read_resource(file.path()).unwrap();
    let report = inspect(&resource);
    assert!(report.contains("id: -"));
    assert!(report.contains("contained:\n  [0] Location id=l1"));
}

#[test]
fn test_roundtrip_reports_unchanged() {
    let text = r#"{"resourceType":"Observation","status":"final","valueQuantity":{"value":1.50}}"#;
    let file = write_fixture(text);
    let (source, resource) = read_resource(file.path()).unwrap();
    let outcome = roundtrip(&source, &resource, false).unwrap();
    assert!(outcome.unchanged);
    assert_eq!(outcome.output, text);
}

#[test]
fn test_roundtrip_detects_dropped_member() {
    // Patient does not model `favouriteColour`, so it is lost.
    let file = write_fixture(r#"{"resourceType":"Patient","favouriteColour":"blue"}"#);
    let (source, resource) = read_resource(file.path()).unwrap();
    let outcome = roundtrip(&source, &resource, true).unwrap();
    assert!(!outcome.unchanged);
    assert_eq!(outcome.output, "{\n  \"resourceType\": \"Patient\"\n}");
}

#[test]
fn test_decode_failure_names_file() {
    let file = write_fixture(r#"{"resourceType":"Patient","active":"yes"}"#);
    let error = read_resource(file.path()).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("decoding"));
    assert!(message.contains("Patient.active"));
}

#[test]
fn test_registry_lists_suffixes_and_resources() {
    let report = registry();
    assert!(report.contains("Quantity -> valueQuantity"));
    assert!(report.contains("String -> valueString"));
    assert!(report.contains("\n  ValueSet"));
}
