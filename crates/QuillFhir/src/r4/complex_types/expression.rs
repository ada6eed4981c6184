use quill_macros::FhirSerde;

use crate::r4::{Code, Extension, FhirString, Id, Uri};

/// FHIR Expression type
///
/// See: [Expression](http://hl7.org/fhir/StructureDefinition/Expression)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Expression {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub description: Option<FhirString>,
    /// Short name assigned to expression for reuse
    pub name: Option<Id>,
    /// text/cql | text/fhirpath | application/x-fhir-query | etc.
    pub language: Option<Code>,
    pub expression: Option<FhirString>,
    pub reference: Option<Uri>,
}
