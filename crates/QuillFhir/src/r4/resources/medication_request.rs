use quill_macros::FhirSerde;

use crate::r4::{
    Annotation, Boolean, Canonical, Code, CodeableConcept, DateTime, Dosage, Duration,
    DynamicValue, Extension, Id, Identifier, Meta, Narrative, Period, Reference, Resource,
    SimpleQuantity, UnsignedInt, Uri,
};

/// FHIR MedicationRequest resource
///
/// An order or request for both supply of the medication and the
/// instructions for administration of the medication to a patient.
///
/// See: [MedicationRequest](http://hl7.org/fhir/StructureDefinition/MedicationRequest)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "MedicationRequest")]
pub struct MedicationRequest {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// active | on-hold | cancelled | completed | entered-in-error | stopped | draft | unknown
    pub status: Option<Code>,
    pub status_reason: Option<CodeableConcept>,
    /// proposal | plan | order | original-order | reflex-order | filler-order | instance-order | option
    pub intent: Option<Code>,
    pub category: Vec<CodeableConcept>,
    pub priority: Option<Code>,
    pub do_not_perform: Option<Boolean>,
    /// Reported rather than primary record (boolean | Reference)
    #[fhir_serde(choice = "reported")]
    pub reported: Option<DynamicValue>,
    /// Medication to be taken (CodeableConcept | Reference)
    #[fhir_serde(choice = "medication")]
    pub medication: Option<DynamicValue>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    pub supporting_information: Vec<Reference>,
    pub authored_on: Option<DateTime>,
    pub requester: Option<Reference>,
    pub performer: Option<Reference>,
    pub performer_type: Option<CodeableConcept>,
    pub recorder: Option<Reference>,
    pub reason_code: Vec<CodeableConcept>,
    pub reason_reference: Vec<Reference>,
    pub instantiates_canonical: Vec<Canonical>,
    pub instantiates_uri: Vec<Uri>,
    pub based_on: Vec<Reference>,
    pub group_identifier: Option<Identifier>,
    pub course_of_therapy_type: Option<CodeableConcept>,
    pub insurance: Vec<Reference>,
    pub note: Vec<Annotation>,
    pub dosage_instruction: Vec<Dosage>,
    pub dispense_request: Option<MedicationRequestDispenseRequest>,
    pub substitution: Option<MedicationRequestSubstitution>,
    pub prior_prescription: Option<Reference>,
    pub detected_issue: Vec<Reference>,
    pub event_history: Vec<Reference>,
}

/// Medication supply authorization
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationRequestDispenseRequest {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub initial_fill: Option<MedicationRequestDispenseRequestInitialFill>,
    pub dispense_interval: Option<Duration>,
    pub validity_period: Option<Period>,
    pub number_of_repeats_allowed: Option<UnsignedInt>,
    pub quantity: Option<SimpleQuantity>,
    pub expected_supply_duration: Option<Duration>,
    pub performer: Option<Reference>,
}

/// First fill details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationRequestDispenseRequestInitialFill {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub quantity: Option<SimpleQuantity>,
    pub duration: Option<Duration>,
}

/// Any restrictions on medication substitution
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationRequestSubstitution {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// Whether substitution is allowed or not (boolean | CodeableConcept)
    #[fhir_serde(choice = "allowed")]
    pub allowed: Option<DynamicValue>,
    pub reason: Option<CodeableConcept>,
}
