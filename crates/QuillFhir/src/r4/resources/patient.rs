use quill_macros::FhirSerde;

use crate::r4::{
    Address, Attachment, Boolean, Code, CodeableConcept, ContactPoint, Date, DynamicValue,
    Extension, HumanName, Id, Identifier, Meta, Narrative, Period, Reference, Resource, Uri,
};

/// FHIR Patient resource
///
/// Demographics and other administrative information about an individual
/// receiving care or other health-related services.
///
/// See: [Patient](http://hl7.org/fhir/StructureDefinition/Patient)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Patient")]
pub struct Patient {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// Whether this patient's record is in active use
    pub active: Option<Boolean>,
    pub name: Vec<HumanName>,
    pub telecom: Vec<ContactPoint>,
    /// male | female | other | unknown
    pub gender: Option<Code>,
    pub birth_date: Option<Date>,
    /// Indicates if the individual is deceased or not (boolean | dateTime)
    #[fhir_serde(choice = "deceased")]
    pub deceased: Option<DynamicValue>,
    pub address: Vec<Address>,
    pub marital_status: Option<CodeableConcept>,
    /// Whether patient is part of a multiple birth (boolean | integer)
    #[fhir_serde(choice = "multipleBirth")]
    pub multiple_birth: Option<DynamicValue>,
    pub photo: Vec<Attachment>,
    pub contact: Vec<PatientContact>,
    pub communication: Vec<PatientCommunication>,
    pub general_practitioner: Vec<Reference>,
    pub managing_organization: Option<Reference>,
    pub link: Vec<PatientLink>,
}

/// A contact party (e.g. guardian, partner, friend) for the patient
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PatientContact {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub relationship: Vec<CodeableConcept>,
    pub name: Option<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub address: Option<Address>,
    pub gender: Option<Code>,
    pub organization: Option<Reference>,
    pub period: Option<Period>,
}

/// A language which may be used to communicate with the patient
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PatientCommunication {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub language: Option<CodeableConcept>,
    pub preferred: Option<Boolean>,
}

/// Link to another patient resource that concerns the same actual person
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PatientLink {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub other: Option<Reference>,
    /// replaced-by | replaces | refer | seealso
    #[fhir_serde(rename = "type")]
    pub type_: Option<Code>,
}
