use quill_macros::FhirSerde;

use crate::r4::{
    Code, CodeableConcept, DateTime, Extension, FhirString, Id, Identifier, Instant, Meta,
    Narrative, Period, PositiveInt, Reference, Resource, UnsignedInt, Uri,
};

/// FHIR Appointment resource
///
/// A booking of a healthcare event among patient(s), practitioner(s),
/// related person(s) and/or device(s) for a specific date/time.
///
/// See: [Appointment](http://hl7.org/fhir/StructureDefinition/Appointment)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Appointment")]
pub struct Appointment {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// proposed | pending | booked | arrived | fulfilled | cancelled | noshow | entered-in-error | checked-in | waitlist
    pub status: Option<Code>,
    pub cancelation_reason: Option<CodeableConcept>,
    pub service_category: Vec<CodeableConcept>,
    pub service_type: Vec<CodeableConcept>,
    pub specialty: Vec<CodeableConcept>,
    pub appointment_type: Option<CodeableConcept>,
    pub reason_code: Vec<CodeableConcept>,
    pub reason_reference: Vec<Reference>,
    pub priority: Option<UnsignedInt>,
    pub description: Option<FhirString>,
    pub supporting_information: Vec<Reference>,
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub minutes_duration: Option<PositiveInt>,
    pub slot: Vec<Reference>,
    pub created: Option<DateTime>,
    pub comment: Option<FhirString>,
    pub patient_instruction: Option<FhirString>,
    pub based_on: Vec<Reference>,
    pub participant: Vec<AppointmentParticipant>,
    pub requested_period: Vec<Period>,
}

/// Participants involved in appointment
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct AppointmentParticipant {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    #[fhir_serde(rename = "type")]
    pub type_: Vec<CodeableConcept>,
    pub actor: Option<Reference>,
    /// required | optional | information-only
    pub required: Option<Code>,
    /// accepted | declined | tentative | needs-action
    pub status: Option<Code>,
    pub period: Option<Period>,
}
