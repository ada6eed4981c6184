use quill_macros::FhirSerde;

use crate::r4::{
    Code, CodeableConcept, Coding, Duration, Extension, Id, Identifier, Meta, Narrative, Period,
    PositiveInt, Reference, Resource, Uri,
};

/// FHIR Encounter resource
///
/// An interaction between a patient and healthcare provider(s).
///
/// See: [Encounter](http://hl7.org/fhir/StructureDefinition/Encounter)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Encounter")]
pub struct Encounter {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// planned | arrived | triaged | in-progress | onleave | finished | cancelled +
    pub status: Option<Code>,
    pub status_history: Vec<EncounterStatusHistory>,
    pub class: Option<Coding>,
    pub class_history: Vec<EncounterClassHistory>,
    #[fhir_serde(rename = "type")]
    pub type_: Vec<CodeableConcept>,
    pub service_type: Option<CodeableConcept>,
    pub priority: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub episode_of_care: Vec<Reference>,
    pub based_on: Vec<Reference>,
    pub participant: Vec<EncounterParticipant>,
    pub appointment: Vec<Reference>,
    pub period: Option<Period>,
    pub length: Option<Duration>,
    pub reason_code: Vec<CodeableConcept>,
    pub reason_reference: Vec<Reference>,
    pub diagnosis: Vec<EncounterDiagnosis>,
    pub account: Vec<Reference>,
    pub hospitalization: Option<EncounterHospitalization>,
    pub location: Vec<EncounterLocation>,
    pub service_provider: Option<Reference>,
    pub part_of: Option<Reference>,
}

/// List of past encounter statuses
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EncounterStatusHistory {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub status: Option<Code>,
    pub period: Option<Period>,
}

/// List of past encounter classes
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EncounterClassHistory {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub class: Option<Coding>,
    pub period: Option<Period>,
}

/// List of participants involved in the encounter
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EncounterParticipant {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    #[fhir_serde(rename = "type")]
    pub type_: Vec<CodeableConcept>,
    pub period: Option<Period>,
    pub individual: Option<Reference>,
}

/// The list of diagnosis relevant to this encounter
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EncounterDiagnosis {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub condition: Option<Reference>,
    #[fhir_serde(rename = "use")]
    pub use_: Option<CodeableConcept>,
    pub rank: Option<PositiveInt>,
}

/// Details about the admission to a healthcare service
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EncounterHospitalization {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub pre_admission_identifier: Option<Identifier>,
    pub origin: Option<Reference>,
    pub admit_source: Option<CodeableConcept>,
    pub re_admission: Option<CodeableConcept>,
    pub diet_preference: Vec<CodeableConcept>,
    pub special_courtesy: Vec<CodeableConcept>,
    pub special_arrangement: Vec<CodeableConcept>,
    pub destination: Option<Reference>,
    pub discharge_disposition: Option<CodeableConcept>,
}

/// List of locations where the patient has been
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EncounterLocation {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub location: Option<Reference>,
    /// planned | active | reserved | completed
    pub status: Option<Code>,
    pub physical_type: Option<CodeableConcept>,
    pub period: Option<Period>,
}
