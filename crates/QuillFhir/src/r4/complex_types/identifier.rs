use quill_macros::FhirSerde;

use crate::r4::{Code, CodeableConcept, Extension, FhirString, Period, Reference, Uri};

/// FHIR Identifier type
///
/// An identifier intended for computation.
///
/// See: [Identifier](http://hl7.org/fhir/StructureDefinition/Identifier)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Identifier {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// usual | official | temp | secondary | old
    #[fhir_serde(rename = "use")]
    pub use_: Option<Code>,
    #[fhir_serde(rename = "type")]
    pub type_: Option<CodeableConcept>,
    /// The namespace for the identifier value
    pub system: Option<Uri>,
    pub value: Option<FhirString>,
    pub period: Option<Period>,
    /// Organization that issued id
    pub assigner: Option<Box<Reference>>,
}
