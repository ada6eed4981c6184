use quill_macros::FhirSerde;

use crate::r4::{
    Attachment, Code, CodeableConcept, DynamicValue, Extension, FhirString, Id, Identifier,
    Instant, Meta, Narrative, Reference, Resource, Uri,
};

/// FHIR DiagnosticReport resource
///
/// The findings and interpretation of diagnostic tests performed on patients,
/// groups of patients, devices, and locations, and/or specimens derived from
/// these.
///
/// See: [DiagnosticReport](http://hl7.org/fhir/StructureDefinition/DiagnosticReport)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "DiagnosticReport")]
pub struct DiagnosticReport {
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
    /// registered | partial | preliminary | final +
    pub status: Option<Code>,
    pub category: Vec<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    /// Clinically relevant time/time-period for report (dateTime | Period)
    #[fhir_serde(choice = "effective")]
    pub effective: Option<DynamicValue>,
    pub issued: Option<Instant>,
    pub performer: Vec<Reference>,
    pub results_interpreter: Vec<Reference>,
    pub specimen: Vec<Reference>,
    pub result: Vec<Reference>,
    pub imaging_study: Vec<Reference>,
    pub media: Vec<DiagnosticReportMedia>,
    pub conclusion: Option<FhirString>,
    pub conclusion_code: Vec<CodeableConcept>,
    pub presented_form: Vec<Attachment>,
}

/// Key images associated with this report
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DiagnosticReportMedia {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub comment: Option<FhirString>,
    pub link: Option<Reference>,
}
