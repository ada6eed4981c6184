use quill_macros::FhirSerde;

use crate::r4::{Code, ContactDetail, Extension, FhirString};

/// FHIR Contributor type
///
/// See: [Contributor](http://hl7.org/fhir/StructureDefinition/Contributor)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Contributor {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// author | editor | reviewer | endorser
    #[fhir_serde(rename = "type")]
    pub type_: Option<Code>,
    pub name: Option<FhirString>,
    pub contact: Vec<ContactDetail>,
}
