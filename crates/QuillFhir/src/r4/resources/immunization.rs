use quill_macros::FhirSerde;

use crate::r4::{
    Annotation, Boolean, Code, CodeableConcept, Date, DateTime, DynamicValue, Extension,
    FhirString, Id, Identifier, Meta, Narrative, Reference, Resource, SimpleQuantity, Uri,
};

/// FHIR Immunization resource
///
/// Describes the event of a patient being administered a vaccine or a record
/// of an immunization as reported by a patient, a clinician or another party.
///
/// See: [Immunization](http://hl7.org/fhir/StructureDefinition/Immunization)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Immunization")]
pub struct Immunization {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// completed | entered-in-error | not-done
    pub status: Option<Code>,
    pub status_reason: Option<CodeableConcept>,
    pub vaccine_code: Option<CodeableConcept>,
    pub patient: Option<Reference>,
    pub encounter: Option<Reference>,
    /// Vaccine administration date (dateTime | string)
    #[fhir_serde(choice = "occurrence")]
    pub occurrence: Option<DynamicValue>,
    pub recorded: Option<DateTime>,
    pub primary_source: Option<Boolean>,
    pub report_origin: Option<CodeableConcept>,
    pub location: Option<Reference>,
    pub manufacturer: Option<Reference>,
    pub lot_number: Option<FhirString>,
    pub expiration_date: Option<Date>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub dose_quantity: Option<SimpleQuantity>,
    pub performer: Vec<ImmunizationPerformer>,
    pub note: Vec<Annotation>,
    pub reason_code: Vec<CodeableConcept>,
    pub reason_reference: Vec<Reference>,
    pub is_subpotent: Option<Boolean>,
    pub subpotent_reason: Vec<CodeableConcept>,
    pub education: Vec<ImmunizationEducation>,
    pub program_eligibility: Vec<CodeableConcept>,
    pub funding_source: Option<CodeableConcept>,
    pub reaction: Vec<ImmunizationReaction>,
    pub protocol_applied: Vec<ImmunizationProtocolApplied>,
}

/// Who performed event
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ImmunizationPerformer {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub function: Option<CodeableConcept>,
    pub actor: Option<Reference>,
}

/// Educational material presented to patient
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ImmunizationEducation {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub document_type: Option<FhirString>,
    pub reference: Option<Uri>,
    pub publication_date: Option<DateTime>,
    pub presentation_date: Option<DateTime>,
}

/// Details of a reaction that follows immunization
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ImmunizationReaction {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub date: Option<DateTime>,
    pub detail: Option<Reference>,
    pub reported: Option<Boolean>,
}

/// Protocol followed by the provider
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ImmunizationProtocolApplied {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub series: Option<FhirString>,
    pub authority: Option<Reference>,
    pub target_disease: Vec<CodeableConcept>,
    /// Dose number within series (positiveInt | string)
    #[fhir_serde(choice = "doseNumber")]
    pub dose_number: Option<DynamicValue>,
    /// Recommended number of doses for immunity (positiveInt | string)
    #[fhir_serde(choice = "seriesDoses")]
    pub series_doses: Option<DynamicValue>,
}
