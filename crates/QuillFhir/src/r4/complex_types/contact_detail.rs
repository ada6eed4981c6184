use quill_macros::FhirSerde;

use crate::r4::{ContactPoint, Extension, FhirString};

/// FHIR ContactDetail type
///
/// See: [ContactDetail](http://hl7.org/fhir/StructureDefinition/ContactDetail)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ContactDetail {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub name: Option<FhirString>,
    pub telecom: Vec<ContactPoint>,
}
