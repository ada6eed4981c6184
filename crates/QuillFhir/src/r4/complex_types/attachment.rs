use quill_macros::FhirSerde;

use crate::r4::{Base64Binary, Code, DateTime, Extension, FhirString, UnsignedInt, Url};

/// FHIR Attachment type
///
/// Content in a format defined elsewhere.
///
/// See: [Attachment](http://hl7.org/fhir/StructureDefinition/Attachment)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Attachment {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Mime type of the content, with charset etc.
    pub content_type: Option<Code>,
    pub language: Option<Code>,
    /// Data inline, base64ed
    pub data: Option<Base64Binary>,
    pub url: Option<Url>,
    /// Number of bytes of content (if url provided)
    pub size: Option<UnsignedInt>,
    /// Hash of the data (sha-1, base64ed)
    pub hash: Option<Base64Binary>,
    pub title: Option<FhirString>,
    pub creation: Option<DateTime>,
}
