use quill_macros::FhirSerde;

use crate::r4::{Base64Binary, Code, Coding, Extension, Instant, Reference};

/// FHIR Signature type
///
/// A digital signature along with supporting context.
///
/// See: [Signature](http://hl7.org/fhir/StructureDefinition/Signature)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Signature {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Indication of the reason the entity signed the object(s)
    #[fhir_serde(rename = "type")]
    pub type_: Vec<Coding>,
    pub when: Option<Instant>,
    pub who: Option<Reference>,
    pub on_behalf_of: Option<Reference>,
    pub target_format: Option<Code>,
    pub sig_format: Option<Code>,
    pub data: Option<Base64Binary>,
}
