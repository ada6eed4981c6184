use quill_macros::FhirSerde;

use crate::r4::{
    Annotation, Code, CodeableConcept, DateTime, DynamicValue, Extension, FhirString, Id,
    Identifier, Meta, Narrative, Reference, Resource, Uri,
};

/// FHIR AllergyIntolerance resource
///
/// Risk of harmful or undesirable, physiological response which is unique
/// to an individual and associated with exposure to a substance.
///
/// See: [AllergyIntolerance](http://hl7.org/fhir/StructureDefinition/AllergyIntolerance)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "AllergyIntolerance")]
pub struct AllergyIntolerance {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub clinical_status: Option<CodeableConcept>,
    pub verification_status: Option<CodeableConcept>,
    /// allergy | intolerance - Underlying mechanism (if known)
    #[fhir_serde(rename = "type")]
    pub type_: Option<Code>,
    /// food | medication | environment | biologic
    pub category: Vec<Code>,
    /// low | high | unable-to-assess
    pub criticality: Option<Code>,
    pub code: Option<CodeableConcept>,
    pub patient: Option<Reference>,
    pub encounter: Option<Reference>,
    /// When allergy or intolerance was identified (dateTime | Age | Period | Range | string)
    #[fhir_serde(choice = "onset")]
    pub onset: Option<DynamicValue>,
    pub recorded_date: Option<DateTime>,
    pub recorder: Option<Reference>,
    pub asserter: Option<Reference>,
    pub last_occurrence: Option<DateTime>,
    pub note: Vec<Annotation>,
    pub reaction: Vec<AllergyIntoleranceReaction>,
}

/// Adverse Reaction Events linked to exposure to substance
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct AllergyIntoleranceReaction {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub substance: Option<CodeableConcept>,
    pub manifestation: Vec<CodeableConcept>,
    pub description: Option<FhirString>,
    pub onset: Option<DateTime>,
    /// mild | moderate | severe (of event as a whole)
    pub severity: Option<Code>,
    pub exposure_route: Option<CodeableConcept>,
    pub note: Vec<Annotation>,
}
