use quill_macros::FhirSerde;

use crate::r4::{Code, Extension, Xhtml};

/// FHIR Narrative type
///
/// A human-readable summary of the resource.
///
/// See: [Narrative](http://hl7.org/fhir/StructureDefinition/Narrative)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Narrative {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// generated | extensions | additional | empty
    pub status: Option<Code>,
    /// Limited xhtml content
    pub div: Option<Xhtml>,
}
