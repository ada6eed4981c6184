use quill_macros::FhirSerde;

use crate::r4::{Canonical, Code, Extension, FhirString, Integer};

/// FHIR ParameterDefinition type
///
/// See: [ParameterDefinition](http://hl7.org/fhir/StructureDefinition/ParameterDefinition)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ParameterDefinition {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub name: Option<Code>,
    /// in | out
    #[fhir_serde(rename = "use")]
    pub use_: Option<Code>,
    pub min: Option<Integer>,
    /// Maximum cardinality (a number or *)
    pub max: Option<FhirString>,
    pub documentation: Option<FhirString>,
    #[fhir_serde(rename = "type")]
    pub type_: Option<Code>,
    pub profile: Option<Canonical>,
}
