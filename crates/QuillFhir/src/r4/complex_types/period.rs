use quill_macros::FhirSerde;

use crate::r4::{DateTime, Extension};

/// FHIR Period type
///
/// A time period defined by a start and end date and optionally time.
///
/// See: [Period](http://hl7.org/fhir/StructureDefinition/Period)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Period {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
}
