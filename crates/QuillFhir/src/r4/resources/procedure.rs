use quill_macros::FhirSerde;

use crate::r4::{
    Annotation, Canonical, Code, CodeableConcept, DynamicValue, Extension, Id, Identifier, Meta,
    Narrative, Reference, Resource, Uri,
};

/// FHIR Procedure resource
///
/// An action that is or was performed on or for a patient.
///
/// See: [Procedure](http://hl7.org/fhir/StructureDefinition/Procedure)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Procedure")]
pub struct Procedure {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub instantiates_canonical: Vec<Canonical>,
    pub instantiates_uri: Vec<Uri>,
    pub based_on: Vec<Reference>,
    pub part_of: Vec<Reference>,
    /// preparation | in-progress | not-done | on-hold | stopped | completed | entered-in-error | unknown
    pub status: Option<Code>,
    pub status_reason: Option<CodeableConcept>,
    pub category: Option<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    /// When the procedure was performed (dateTime | Period | string | Age | Range)
    #[fhir_serde(choice = "performed")]
    pub performed: Option<DynamicValue>,
    pub recorder: Option<Reference>,
    pub asserter: Option<Reference>,
    pub performer: Vec<ProcedurePerformer>,
    pub location: Option<Reference>,
    pub reason_code: Vec<CodeableConcept>,
    pub reason_reference: Vec<Reference>,
    pub body_site: Vec<CodeableConcept>,
    pub outcome: Option<CodeableConcept>,
    pub report: Vec<Reference>,
    pub complication: Vec<CodeableConcept>,
    pub complication_detail: Vec<Reference>,
    pub follow_up: Vec<CodeableConcept>,
    pub note: Vec<Annotation>,
    pub focal_device: Vec<ProcedureFocalDevice>,
    pub used_reference: Vec<Reference>,
    pub used_code: Vec<CodeableConcept>,
}

/// The people who performed the procedure
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ProcedurePerformer {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub function: Option<CodeableConcept>,
    pub actor: Option<Reference>,
    pub on_behalf_of: Option<Reference>,
}

/// Manipulated, implanted, or removed device
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ProcedureFocalDevice {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub action: Option<CodeableConcept>,
    pub manipulated: Option<Reference>,
}
