use quill_macros::FhirSerde;

use crate::r4::{
    Address, Attachment, Boolean, Code, CodeableConcept, ContactPoint, Date, Extension,
    HumanName, Id, Identifier, Meta, Narrative, Period, Reference, Resource, Uri,
};

/// FHIR Practitioner resource
///
/// A person who is directly or indirectly involved in the provisioning of
/// healthcare.
///
/// See: [Practitioner](http://hl7.org/fhir/StructureDefinition/Practitioner)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Practitioner")]
pub struct Practitioner {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub active: Option<Boolean>,
    pub name: Vec<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub address: Vec<Address>,
    pub gender: Option<Code>,
    pub birth_date: Option<Date>,
    pub photo: Vec<Attachment>,
    pub qualification: Vec<PractitionerQualification>,
    /// A language the practitioner can use in patient communication
    pub communication: Vec<CodeableConcept>,
}

/// Certification, licenses, or training pertaining to the provision of care
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PractitionerQualification {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub code: Option<CodeableConcept>,
    pub period: Option<Period>,
    pub issuer: Option<Reference>,
}
