use quill_macros::FhirSerde;

use crate::r4::{
    Annotation, Code, CodeableConcept, DateTime, DynamicValue, Extension, Id, Identifier, Meta,
    Narrative, Reference, Resource, Uri,
};

/// FHIR Condition resource
///
/// A clinical condition, problem, diagnosis, or other event, situation,
/// issue, or clinical concept that has risen to a level of concern.
///
/// See: [Condition](http://hl7.org/fhir/StructureDefinition/Condition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Condition")]
pub struct Condition {
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
    pub category: Vec<CodeableConcept>,
    pub severity: Option<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub body_site: Vec<CodeableConcept>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    /// Estimated or actual date, date-time, or age
    /// (dateTime | Age | Period | Range | string)
    #[fhir_serde(choice = "onset")]
    pub onset: Option<DynamicValue>,
    /// When in resolution/remission (dateTime | Age | Period | Range | string)
    #[fhir_serde(choice = "abatement")]
    pub abatement: Option<DynamicValue>,
    pub recorded_date: Option<DateTime>,
    pub recorder: Option<Reference>,
    pub asserter: Option<Reference>,
    pub stage: Vec<ConditionStage>,
    pub evidence: Vec<ConditionEvidence>,
    pub note: Vec<Annotation>,
}

/// Stage/grade, usually assessed formally
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ConditionStage {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub summary: Option<CodeableConcept>,
    pub assessment: Vec<Reference>,
    #[fhir_serde(rename = "type")]
    pub type_: Option<CodeableConcept>,
}

/// Supporting evidence
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ConditionEvidence {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub code: Vec<CodeableConcept>,
    pub detail: Vec<Reference>,
}
