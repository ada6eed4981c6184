use quill_macros::FhirSerde;

use crate::r4::{Extension, FhirString, Identifier, Uri};

/// FHIR Reference type
///
/// A reference from one resource to another.
///
/// See: [Reference](http://hl7.org/fhir/StructureDefinition/Reference)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Reference {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Literal reference, relative, internal or absolute URL
    pub reference: Option<FhirString>,
    /// Type the reference refers to (e.g. "Patient")
    #[fhir_serde(rename = "type")]
    pub type_: Option<Uri>,
    pub identifier: Option<Identifier>,
    pub display: Option<FhirString>,
}

impl Reference {
    pub fn to(reference: &str) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }
}
