use quill_macros::FhirSerde;

use crate::r4::{Coding, DynamicValue, Extension};

/// FHIR UsageContext type
///
/// Describes the context of use for a conformance or knowledge resource.
///
/// See: [UsageContext](http://hl7.org/fhir/StructureDefinition/UsageContext)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct UsageContext {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub code: Option<Coding>,
    /// Value that defines the context (CodeableConcept | Quantity | Range | Reference)
    #[fhir_serde(choice = "value")]
    pub value: Option<DynamicValue>,
}
