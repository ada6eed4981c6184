use quill_macros::FhirSerde;

use crate::r4::{Code, DataRequirement, DynamicValue, Expression, Extension, FhirString};

/// FHIR TriggerDefinition type
///
/// See: [TriggerDefinition](http://hl7.org/fhir/StructureDefinition/TriggerDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct TriggerDefinition {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// named-event | periodic | data-changed | data-added | data-modified |
    /// data-removed | data-accessed | data-access-ended
    #[fhir_serde(rename = "type")]
    pub type_: Option<Code>,
    pub name: Option<FhirString>,
    /// Timing | Reference | date | dateTime
    #[fhir_serde(choice = "timing")]
    pub timing: Option<DynamicValue>,
    pub data: Vec<DataRequirement>,
    pub condition: Option<Expression>,
}
