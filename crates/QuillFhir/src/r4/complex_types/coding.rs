use quill_macros::FhirSerde;

use crate::r4::{Boolean, Code, Extension, FhirString, Uri};

/// FHIR Coding type
///
/// A reference to a code defined by a terminology system.
///
/// See: [Coding](http://hl7.org/fhir/StructureDefinition/Coding)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Coding {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Identity of the terminology system
    pub system: Option<Uri>,
    pub version: Option<FhirString>,
    /// Symbol in syntax defined by the system
    pub code: Option<Code>,
    pub display: Option<FhirString>,
    pub user_selected: Option<Boolean>,
}

impl Coding {
    pub fn new(system: &str, code: &str) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }
}
