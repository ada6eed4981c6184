use quill_macros::FhirSerde;

use crate::r4::{
    Annotation, Boolean, Canonical, Code, CodeableConcept, DateTime, DynamicValue, Extension,
    FhirString, Id, Identifier, Meta, Narrative, Period, Quantity, Reference, Resource,
    SimpleQuantity, Uri,
};

/// FHIR CarePlan resource
///
/// Describes the intention of how one or more practitioners intend to
/// deliver care for a particular patient, group or community.
///
/// See: [CarePlan](http://hl7.org/fhir/StructureDefinition/CarePlan)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "CarePlan")]
pub struct CarePlan {
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
    pub replaces: Vec<Reference>,
    pub part_of: Vec<Reference>,
    /// draft | active | on-hold | revoked | completed | entered-in-error | unknown
    pub status: Option<Code>,
    /// proposal | plan | order | option
    pub intent: Option<Code>,
    pub category: Vec<CodeableConcept>,
    pub title: Option<FhirString>,
    pub description: Option<FhirString>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    pub period: Option<Period>,
    pub created: Option<DateTime>,
    pub author: Option<Reference>,
    pub contributor: Vec<Reference>,
    pub care_team: Vec<Reference>,
    pub addresses: Vec<Reference>,
    pub supporting_info: Vec<Reference>,
    pub goal: Vec<Reference>,
    pub activity: Vec<CarePlanActivity>,
    pub note: Vec<Annotation>,
}

/// Action to occur as part of plan
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct CarePlanActivity {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub outcome_codeable_concept: Vec<CodeableConcept>,
    pub outcome_reference: Vec<Reference>,
    pub progress: Vec<Annotation>,
    pub reference: Option<Reference>,
    pub detail: Option<CarePlanActivityDetail>,
}

/// In-line definition of activity
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct CarePlanActivityDetail {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// Appointment | CommunicationRequest | DeviceRequest | MedicationRequest | NutritionOrder | Task | ServiceRequest | VisionPrescription
    pub kind: Option<Code>,
    pub instantiates_canonical: Vec<Canonical>,
    pub instantiates_uri: Vec<Uri>,
    pub code: Option<CodeableConcept>,
    pub reason_code: Vec<CodeableConcept>,
    pub reason_reference: Vec<Reference>,
    pub goal: Vec<Reference>,
    /// not-started | scheduled | in-progress | on-hold | completed | cancelled | stopped | unknown | entered-in-error
    pub status: Option<Code>,
    pub status_reason: Option<CodeableConcept>,
    pub do_not_perform: Option<Boolean>,
    /// When activity is to occur (Timing | Period | string)
    #[fhir_serde(choice = "scheduled")]
    pub scheduled: Option<DynamicValue>,
    pub location: Option<Reference>,
    pub performer: Vec<Reference>,
    /// What is to be administered/supplied (CodeableConcept | Reference)
    #[fhir_serde(choice = "product")]
    pub product: Option<DynamicValue>,
    pub daily_amount: Option<SimpleQuantity>,
    pub quantity: Option<Quantity>,
    pub description: Option<FhirString>,
}
