use quill_macros::FhirSerde;

use crate::r4::{Code, Extension, FhirString, Period};

/// FHIR Address type
///
/// See: [Address](http://hl7.org/fhir/StructureDefinition/Address)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Address {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// home | work | temp | old | billing
    #[fhir_serde(rename = "use")]
    pub use_: Option<Code>,
    /// postal | physical | both
    #[fhir_serde(rename = "type")]
    pub type_: Option<Code>,
    pub text: Option<FhirString>,
    /// Street name, number, direction & P.O. Box etc.
    pub line: Vec<FhirString>,
    pub city: Option<FhirString>,
    pub district: Option<FhirString>,
    pub state: Option<FhirString>,
    pub postal_code: Option<FhirString>,
    pub country: Option<FhirString>,
    pub period: Option<Period>,
}
