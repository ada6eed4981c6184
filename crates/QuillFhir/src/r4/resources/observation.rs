use quill_macros::FhirSerde;

use crate::r4::{
    Annotation, Code, CodeableConcept, DynamicValue, Extension, FhirString, Id, Identifier,
    Instant, Meta, Narrative, Quantity, Range, Reference, Resource, Uri,
};

/// FHIR Observation resource
///
/// Measurements and simple assertions made about a patient, device or other
/// subject.
///
/// See: [Observation](http://hl7.org/fhir/StructureDefinition/Observation)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Observation")]
pub struct Observation {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub based_on: Vec<Reference>,
    pub part_of: Vec<Reference>,
    /// registered | preliminary | final | amended +
    pub status: Option<Code>,
    pub category: Vec<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub focus: Vec<Reference>,
    pub encounter: Option<Reference>,
    /// Clinically relevant time/time-period for observation
    /// (dateTime | Period | Timing | instant)
    #[fhir_serde(choice = "effective")]
    pub effective: Option<DynamicValue>,
    pub issued: Option<Instant>,
    pub performer: Vec<Reference>,
    /// Actual result
    #[fhir_serde(choice = "value")]
    pub value: Option<DynamicValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Vec<CodeableConcept>,
    pub note: Vec<Annotation>,
    pub body_site: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub specimen: Option<Reference>,
    pub device: Option<Reference>,
    pub reference_range: Vec<ObservationReferenceRange>,
    pub has_member: Vec<Reference>,
    pub derived_from: Vec<Reference>,
    pub component: Vec<ObservationComponent>,
}

/// Provides guide for interpretation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ObservationReferenceRange {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
    #[fhir_serde(rename = "type")]
    pub type_: Option<CodeableConcept>,
    pub applies_to: Vec<CodeableConcept>,
    pub age: Option<Range>,
    pub text: Option<FhirString>,
}

/// Component results
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ObservationComponent {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub code: Option<CodeableConcept>,
    #[fhir_serde(choice = "value")]
    pub value: Option<DynamicValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Vec<CodeableConcept>,
    pub reference_range: Vec<ObservationReferenceRange>,
}
