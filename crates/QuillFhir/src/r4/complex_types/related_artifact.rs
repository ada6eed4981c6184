use quill_macros::FhirSerde;

use crate::r4::{Attachment, Canonical, Code, Extension, FhirString, Markdown, Url};

/// FHIR RelatedArtifact type
///
/// See: [RelatedArtifact](http://hl7.org/fhir/StructureDefinition/RelatedArtifact)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct RelatedArtifact {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// documentation | justification | citation | predecessor | successor | derived-from | depends-on | composed-of
    #[fhir_serde(rename = "type")]
    pub type_: Option<Code>,
    pub label: Option<FhirString>,
    pub display: Option<FhirString>,
    pub citation: Option<Markdown>,
    pub url: Option<Url>,
    pub document: Option<Attachment>,
    pub resource: Option<Canonical>,
}
