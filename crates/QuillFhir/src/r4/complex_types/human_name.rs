use quill_macros::FhirSerde;

use crate::r4::{Code, Extension, FhirString, Period};

/// FHIR HumanName type
///
/// See: [HumanName](http://hl7.org/fhir/StructureDefinition/HumanName)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct HumanName {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// usual | official | temp | nickname | anonymous | old | maiden
    #[fhir_serde(rename = "use")]
    pub use_: Option<Code>,
    pub text: Option<FhirString>,
    pub family: Option<FhirString>,
    pub given: Vec<FhirString>,
    pub prefix: Vec<FhirString>,
    pub suffix: Vec<FhirString>,
    pub period: Option<Period>,
}
