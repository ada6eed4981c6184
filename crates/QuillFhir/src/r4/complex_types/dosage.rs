use quill_macros::FhirSerde;

use crate::r4::{
    CodeableConcept, DynamicValue, Extension, FhirString, Integer, Quantity, Ratio, Timing,
};

/// FHIR Dosage type
///
/// How the medication is/was taken or should be taken.
///
/// See: [Dosage](http://hl7.org/fhir/StructureDefinition/Dosage)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Dosage {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// The order of the dosage instructions
    pub sequence: Option<Integer>,
    pub text: Option<FhirString>,
    pub additional_instruction: Vec<CodeableConcept>,
    pub patient_instruction: Option<FhirString>,
    pub timing: Option<Timing>,
    /// Take "as needed" (for x) (boolean | CodeableConcept)
    #[fhir_serde(choice = "asNeeded")]
    pub as_needed: Option<DynamicValue>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub dose_and_rate: Vec<DosageDoseAndRate>,
    pub max_dose_per_period: Option<Ratio>,
    pub max_dose_per_administration: Option<Quantity>,
    pub max_dose_per_lifetime: Option<Quantity>,
}

/// Amount of medication administered
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DosageDoseAndRate {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    #[fhir_serde(rename = "type")]
    pub type_: Option<CodeableConcept>,
    /// Range | SimpleQuantity
    #[fhir_serde(choice = "dose")]
    pub dose: Option<DynamicValue>,
    /// Ratio | Range | SimpleQuantity
    #[fhir_serde(choice = "rate")]
    pub rate: Option<DynamicValue>,
}
