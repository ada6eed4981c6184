use quill_macros::FhirSerde;

use crate::r4::{
    Boolean, Code, CodeableConcept, DateTime, DynamicValue, Extension, FhirString, Id,
    Identifier, Meta, Narrative, Ratio, Reference, Resource, Uri,
};

/// FHIR Medication resource
///
/// Used primarily for the identification and definition of a medication.
///
/// See: [Medication](http://hl7.org/fhir/StructureDefinition/Medication)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Medication")]
pub struct Medication {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub code: Option<CodeableConcept>,
    /// active | inactive | entered-in-error
    pub status: Option<Code>,
    pub manufacturer: Option<Reference>,
    pub form: Option<CodeableConcept>,
    pub amount: Option<Ratio>,
    pub ingredient: Vec<MedicationIngredient>,
    pub batch: Option<MedicationBatch>,
}

/// Active or inactive ingredient
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationIngredient {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// The actual ingredient or content (CodeableConcept | Reference)
    #[fhir_serde(choice = "item")]
    pub item: Option<DynamicValue>,
    pub is_active: Option<Boolean>,
    pub strength: Option<Ratio>,
}

/// Details about packaged medications
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationBatch {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub lot_number: Option<FhirString>,
    pub expiration_date: Option<DateTime>,
}
