use quill_macros::FhirSerde;

use crate::r4::{DateTime, DynamicValue, Extension, Markdown};

/// FHIR Annotation type
///
/// A text note which also contains information about who made the statement
/// and when.
///
/// See: [Annotation](http://hl7.org/fhir/StructureDefinition/Annotation)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Annotation {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Individual responsible for the annotation (Reference | string)
    #[fhir_serde(choice = "author")]
    pub author: Option<DynamicValue>,
    pub time: Option<DateTime>,
    pub text: Option<Markdown>,
}
