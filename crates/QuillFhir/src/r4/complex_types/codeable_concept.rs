use quill_macros::FhirSerde;

use crate::r4::{Coding, Extension, FhirString};

/// FHIR CodeableConcept type
///
/// A concept that may be defined by a formal reference to a terminology or
/// ontology, or by plain text.
///
/// See: [CodeableConcept](http://hl7.org/fhir/StructureDefinition/CodeableConcept)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct CodeableConcept {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub coding: Vec<Coding>,
    /// Plain text representation of the concept
    pub text: Option<FhirString>,
}
