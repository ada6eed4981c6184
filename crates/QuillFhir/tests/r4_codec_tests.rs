use quill_fhir::json::{from_json_str, from_json_value, to_json_string, to_json_value};
use quill_fhir::r4::{
    Boolean, CodeableConcept, Condition, DynamicValue, Extension, FhirString, HumanName,
    Observation, Parameters, Patient, Resource, UnknownResource,
};
use quill_fhir::{DecodeErrorKind, Error, PrecisionInstant};
use serde_json::json;

#[test]
fn test_default_patient_is_sparse() {
    assert_eq!(
        to_json_string(&Patient::default()).unwrap(),
        r#"{"resourceType":"Patient"}"#
    );
}

#[test]
fn test_null_and_empty_members_are_dropped() {
    let source = json!({
        "resourceType": "Patient",
        "id": null,
        "name": [],
        "telecom": [null],
        "gender": "female"
    });
    let patient: Patient = from_json_value(&source).unwrap();
    assert!(patient.id.is_none());
    assert!(patient.name.is_empty());
    assert!(patient.telecom.is_empty());
    assert_eq!(
        to_json_value(&patient),
        json!({"resourceType": "Patient", "gender": "female"})
    );
}

#[test]
fn test_condition_onset_string() {
    let condition = Condition {
        onset: Some(DynamicValue::String(FhirString::from("22"))),
        ..Default::default()
    };
    assert_eq!(
        to_json_value(&condition),
        json!({"resourceType": "Condition", "onsetString": "22"})
    );
}

#[test]
fn test_effective_instant_and_absent_choice() {
    let observation: Observation = from_json_value(&json!({
        "resourceType": "Observation",
        "effectiveInstant": "2017-01-01T00:00:00Z"
    }))
    .unwrap();
    let Some(DynamicValue::Instant(instant)) = observation.effective else {
        panic!("expected an instant");
    };
    assert_eq!(
        instant.value,
        PrecisionInstant::parse("2017-01-01T00:00:00Z")
    );

    let observation: Observation =
        from_json_value(&json!({"resourceType": "Observation", "status": "final"})).unwrap();
    assert_eq!(observation.effective, None);
    assert_eq!(observation.value, None);
}

#[test]
fn test_value_set_key_is_not_a_choice() {
    let extension: Extension = from_json_value(&json!({
        "url": "http://example.org/x",
        "valueSet": "http://example.org/vs"
    }))
    .unwrap();
    assert_eq!(extension.value, None);
    assert_eq!(extension.other.get("valueSet"), Some(&json!("http://example.org/vs")));
}

#[test]
fn test_unknown_extension_value_survives() {
    let source = json!({
        "resourceType": "Patient",
        "extension": [{
            "url": "http://example.org/ext",
            "valueWidget": {"spin": 3},
            "_valueWidget": {"id": "w"},
            "vendorNote": "kept"
        }]
    });
    let patient: Patient = from_json_value(&source).unwrap();
    let extension = &patient.extension[0];
    assert_eq!(extension.value, None);
    let keys: Vec<_> = extension.other.keys().map(String::as_str).collect();
    assert_eq!(keys, ["valueWidget", "_valueWidget", "vendorNote"]);
    assert_eq!(to_json_value(&patient), source);
}

#[test]
fn test_first_choice_member_wins() {
    let observation: Observation = from_json_value(&json!({
        "resourceType": "Observation",
        "valueString": "first",
        "valueBoolean": true
    }))
    .unwrap();
    assert_eq!(
        observation.value,
        Some(DynamicValue::String(FhirString::from("first")))
    );
}

#[test]
fn test_null_choice_member_is_skipped() {
    let observation: Observation = from_json_value(&json!({
        "resourceType": "Observation",
        "valueString": null,
        "valueBoolean": true
    }))
    .unwrap();
    assert_eq!(observation.value, Some(DynamicValue::Boolean(Boolean::from(true))));

    let extension: Extension = from_json_value(&json!({
        "url": "u",
        "valueString": null,
        "valueBoolean": true
    }))
    .unwrap();
    assert_eq!(
        to_json_value(&extension),
        json!({"url": "u", "valueBoolean": true})
    );
}

#[test]
fn test_metadata_types_are_choice_values() {
    let source = json!({
        "resourceType": "Parameters",
        "parameter": [
            {"name": "x", "valueDataRequirement": {"type": "Patient", "limit": 5}},
            {"name": "y", "valueTriggerDefinition": {"type": "named-event", "name": "admit"}},
            {"name": "z", "valueParameterDefinition": {"use": "in", "type": "string"}},
            {"name": "w", "valueContributor": {"type": "author", "name": "Ann"}}
        ]
    });
    let parameters: Parameters = from_json_value(&source).unwrap();
    let Some(DynamicValue::DataRequirement(requirement)) =
        parameters.get("x").and_then(|p| p.value.as_ref())
    else {
        panic!("expected a DataRequirement");
    };
    assert_eq!(requirement.type_.as_ref().and_then(|t| t.value.as_deref()), Some("Patient"));
    assert_eq!(to_json_value(&parameters), source);
}

#[test]
fn test_meta_vendor_members_survive() {
    let source = json!({
        "resourceType": "Banana",
        "meta": {"versionId": "1", "vendorTag": "x"},
        "peel": 1
    });
    let resource: Resource = from_json_value(&source).unwrap();
    assert_eq!(to_json_value(&resource), source);

    let source = json!({
        "resourceType": "Patient",
        "meta": {"lastUpdated": "2020-01-01T00:00:00Z", "vendorTag": {"k": [1]}}
    });
    let patient: Patient = from_json_value(&source).unwrap();
    assert_eq!(to_json_value(&patient), source);
}

#[test]
fn test_unknown_resource_null_header_survives() {
    let source = json!({"resourceType": "Banana", "language": null, "peel": 1});
    let resource: Resource = from_json_value(&source).unwrap();
    assert_eq!(to_json_value(&resource), source);
}

#[test]
fn test_empty_values_are_not_written() {
    let observation = Observation {
        code: Some(CodeableConcept::default()),
        ..Default::default()
    };
    assert_eq!(to_json_value(&observation), json!({"resourceType": "Observation"}));

    let patient = Patient {
        name: vec![HumanName {
            given: vec![FhirString::from("A"), FhirString::default()],
            ..Default::default()
        }],
        ..Default::default()
    };
    let written = to_json_value(&patient);
    assert_eq!(
        written,
        json!({"resourceType": "Patient", "name": [{"given": ["A"]}]})
    );
    let reread: Patient = from_json_value(&written).unwrap();
    assert_eq!(to_json_value(&reread), written);
}

#[test]
fn test_unknown_resource_round_trip() {
    let source = json!({
        "resourceType": "Banana",
        "id": "b1",
        "peel": {"colour": "yellow", "spots": [1, 2, {"big": true}]},
        "_id": {"extension": [{"url": "http://example.org/e", "valueBoolean": true}]},
        "curvature": 0.330
    });
    let resource: Resource = from_json_value(&source).unwrap();
    let Resource::Unknown(banana) = &resource else {
        panic!("expected an unknown resource");
    };
    assert_eq!(banana.resource_type, "Banana");
    assert_eq!(banana.id.as_ref().map(|id| id.extension.len()), Some(1));
    assert_eq!(to_json_value(&resource), source);
    assert!(to_json_string(&resource).unwrap().contains("0.330"));
}

#[test]
fn test_unknown_resource_built_in_code() {
    let mut banana = UnknownResource::new("Banana");
    banana.other_data.insert("ripe".to_string(), json!(true));
    let resource = Resource::from(banana);
    assert_eq!(
        to_json_string(&resource).unwrap(),
        r#"{"resourceType":"Banana","ripe":true}"#
    );
}

#[test]
fn test_contained_heterogeneous_resources() {
    let source = json!({
        "resourceType": "Patient",
        "contained": [
            {"resourceType": "Location", "id": "l1", "name": "Ward 3"},
            {"resourceType": "HealthcareService", "id": "h1", "specialty": [{"text": "x"}]}
        ]
    });
    let patient: Patient = from_json_value(&source).unwrap();
    assert!(matches!(patient.contained[0], Resource::Location(_)));
    assert!(matches!(patient.contained[1], Resource::Unknown(_)));
    assert_eq!(to_json_value(&patient), source);
}

#[test]
fn test_primitive_twins_round_trip() {
    let source = json!({
        "resourceType": "Patient",
        "gender": "female",
        "_gender": {"id": "g"},
        "name": [{
            "given": [null, "Ann", null],
            "_given": [{"id": "first"}, null, {"extension": [{"url": "u", "valueCode": "x"}]}]
        }]
    });
    let patient: Patient = from_json_value(&source).unwrap();
    assert_eq!(patient.name[0].given.len(), 3);
    assert_eq!(patient.name[0].given[0].value, None);
    assert_eq!(to_json_value(&patient), source);
}

#[test]
fn test_decode_error_paths() {
    let error = from_json_str::<Resource>(
        r#"{"resourceType":"Bundle","entry":[{"resource":{"resourceType":"Observation","valueQuantity":"x"}}]}"#,
    )
    .unwrap_err();
    let Error::Decode(error) = error else {
        panic!("expected a decode error");
    };
    assert_eq!(error.path(), "Bundle.entry[0].resource.valueQuantity");
    assert_eq!(
        error.kind(),
        &DecodeErrorKind::InvalidType {
            expected: "object",
            found: "string"
        }
    );

    let error = from_json_str::<Patient>(r#"{"resourceType":"Patient","birthDate":"25/12/1974"}"#)
        .unwrap_err();
    let Error::Decode(error) = error else {
        panic!("expected a decode error");
    };
    assert_eq!(error.path(), "$.birthDate");
    assert!(matches!(
        error.kind(),
        DecodeErrorKind::InvalidValue { expected: "date", .. }
    ));
}

#[test]
fn test_nested_resource_requires_type() {
    let error = from_json_str::<Resource>(
        r#"{"resourceType":"Patient","contained":[{"id":"x"}]}"#,
    )
    .unwrap_err();
    let Error::Decode(error) = error else {
        panic!("expected a decode error");
    };
    assert_eq!(error.kind(), &DecodeErrorKind::MissingResourceType);
    assert_eq!(error.path(), "Patient.contained[0]");
}

#[test]
fn test_serde_integration() {
    let text = r#"{"resourceType":"Condition","id":"c","onsetString":"22"}"#;
    let condition: Condition = serde_json::from_str(text).unwrap();
    assert!(matches!(condition.onset, Some(DynamicValue::String(_))));
    assert_eq!(serde_json::to_string(&condition).unwrap(), text);
}
