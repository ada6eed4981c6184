use std::fs;
use std::path::PathBuf;

use quill_fhir::json::{from_json_str, from_json_value, to_json_string, to_json_value};
use quill_fhir::r4::{
    Bundle, DynamicValue, Observation, Patient, Resource, ResourceType, ValueSet,
};
use serde_json::Value;

fn data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/data/r4");
    path
}

fn load_fixture(name: &str) -> Value {
    let path = data_dir().join(name);
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("could not read {}: {e}", path.display()));
    serde_json::from_str(&contents).unwrap_or_else(|e| panic!("invalid JSON in {name}: {e}"))
}

fn fixture_names() -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(data_dir())
        .expect("fixture directory missing")
        .filter_map(|entry| {
            let name = entry.ok()?.file_name().into_string().ok()?;
            name.ends_with(".json").then_some(name)
        })
        .collect();
    names.sort();
    names
}

#[test]
fn test_every_fixture_round_trips() {
    let names = fixture_names();
    assert!(names.len() >= 10, "expected fixtures, found {names:?}");
    for name in names {
        let source = load_fixture(&name);
        let resource: Resource = from_json_value(&source)
            .unwrap_or_else(|e| panic!("{name} failed to decode: {e}"));
        assert_eq!(to_json_value(&resource), source, "{name} changed on round trip");

        // A second pass through text must be stable too.
        let text = to_json_string(&resource).unwrap();
        let again: Resource = from_json_str(&text).unwrap();
        assert_eq!(again, resource, "{name} is not stable");
    }
}

#[test]
fn test_fixtures_decode_to_expected_variants() {
    let expected = [
        ("allergy-intolerance-example.json", Some(ResourceType::AllergyIntolerance)),
        ("appointment-example.json", Some(ResourceType::Appointment)),
        ("banana.json", None),
        ("basic-example.json", Some(ResourceType::Basic)),
        ("bundle-searchset.json", Some(ResourceType::Bundle)),
        ("care-plan-example.json", Some(ResourceType::CarePlan)),
        ("condition-example.json", Some(ResourceType::Condition)),
        ("encounter-example.json", Some(ResourceType::Encounter)),
        ("immunization-example.json", Some(ResourceType::Immunization)),
        ("medication-example.json", Some(ResourceType::Medication)),
        ("medication-request-example.json", Some(ResourceType::MedicationRequest)),
        ("observation-glucose.json", Some(ResourceType::Observation)),
        ("parameters-example.json", Some(ResourceType::Parameters)),
        ("patient-example.json", Some(ResourceType::Patient)),
        ("valueset-expansion.json", Some(ResourceType::ValueSet)),
    ];
    for (name, resource_type) in expected {
        let resource: Resource = from_json_value(&load_fixture(name)).unwrap();
        assert_eq!(resource.modeled_type(), resource_type, "{name}");
    }
}

#[test]
fn test_patient_fields() {
    let patient: Patient = from_json_value(&load_fixture("patient-example.json")).unwrap();

    assert_eq!(patient.id.as_ref().and_then(|id| id.value.as_deref()), Some("example"));
    assert_eq!(patient.active.as_ref().and_then(|a| a.value), Some(true));
    assert_eq!(patient.name.len(), 2);
    assert_eq!(patient.name[0].given.len(), 2);

    let birth_date = patient.birth_date.as_ref().unwrap();
    assert_eq!(birth_date.value.as_ref().unwrap().original_string(), "1974-12-25");
    assert_eq!(birth_date.extension.len(), 1);
    assert!(matches!(
        birth_date.extension[0].value,
        Some(DynamicValue::DateTime(_))
    ));

    assert!(matches!(patient.deceased, Some(DynamicValue::Boolean(_))));
    let Some(DynamicValue::Integer(order)) = &patient.multiple_birth else {
        panic!("expected multipleBirthInteger");
    };
    assert_eq!(order.value, Some(2));

    let link = &patient.link[0];
    assert_eq!(
        link.other.as_ref().and_then(|r| r.reference.as_ref()).and_then(|r| r.value.as_deref()),
        Some("Patient/pat2")
    );
}

#[test]
fn test_observation_decimal_keeps_lexical_form() {
    let observation: Observation =
        from_json_value(&load_fixture("observation-glucose.json")).unwrap();
    let Some(DynamicValue::Quantity(quantity)) = &observation.value else {
        panic!("expected valueQuantity");
    };
    let value = quantity.value.as_ref().and_then(|v| v.value.as_ref()).unwrap();
    assert_eq!(value.original_string(), "6.30");
    assert!(to_json_string(&observation).unwrap().contains(r#""value":6.30"#));

    let status = observation.status.as_ref().unwrap();
    assert_eq!(status.id.as_deref(), Some("status-1"));
    assert!(matches!(observation.effective, Some(DynamicValue::Period(_))));
}

#[test]
fn test_bundle_entries_dispatch() {
    let bundle: Bundle = from_json_value(&load_fixture("bundle-searchset.json")).unwrap();
    let types: Vec<_> = bundle
        .entry
        .iter()
        .map(|entry| entry.resource.as_ref().unwrap().resource_type().to_string())
        .collect();
    assert_eq!(types, ["Patient", "Observation", "HealthcareService"]);

    let Some(Resource::Observation(observation)) = bundle.entry[1].resource.as_deref() else {
        panic!("expected an Observation entry");
    };
    let Some(DynamicValue::Instant(instant)) = &observation.effective else {
        panic!("expected effectiveInstant");
    };
    assert_eq!(
        instant.value.as_ref().unwrap().original_string(),
        "2017-01-01T00:00:00Z"
    );
    assert!(bundle.entry[2].resource.as_ref().unwrap().is_unknown());
}

#[test]
fn test_bundle_response_outcome() {
    let bundle: Bundle =
        from_json_value(&load_fixture("bundle-transaction-response.json")).unwrap();
    let outcome = bundle.entry[1]
        .response
        .as_ref()
        .and_then(|response| response.outcome.as_deref())
        .unwrap();
    let Resource::OperationOutcome(outcome) = outcome else {
        panic!("expected an OperationOutcome");
    };
    assert_eq!(
        outcome.issue[0].severity.as_ref().and_then(|s| s.value.as_deref()),
        Some("error")
    );
}

#[test]
fn test_value_set_nested_contains() {
    let value_set: ValueSet = from_json_value(&load_fixture("valueset-expansion.json")).unwrap();
    let expansion = value_set.expansion.as_ref().unwrap();
    assert_eq!(expansion.parameter.len(), 3);
    assert!(matches!(expansion.parameter[2].value, Some(DynamicValue::Integer(_))));
    let group = &expansion.contains[0];
    assert_eq!(group.is_abstract.as_ref().and_then(|a| a.value), Some(true));
    assert_eq!(group.contains.len(), 1);
    let compose = value_set.compose.as_ref().unwrap();
    assert_eq!(compose.exclude[0].concept[0].designation.len(), 1);
}

#[test]
fn test_parameters_lookup() {
    let resource: Resource = from_json_value(&load_fixture("parameters-example.json")).unwrap();
    let Resource::Parameters(parameters) = resource else {
        panic!("expected Parameters");
    };
    let result = parameters.get("result").unwrap();
    assert!(matches!(result.resource.as_deref(), Some(Resource::Patient(_))));

    let matched = parameters.get("match").unwrap();
    assert!(matches!(
        matched.part("score").and_then(|p| p.value.as_ref()),
        Some(DynamicValue::Decimal(_))
    ));
    let candidate = matched.part("candidate").and_then(|p| p.resource.as_deref()).unwrap();
    assert_eq!(candidate.resource_type(), "Banana");
    assert!(parameters.get("missing").is_none());
}
