use quill_macros::FhirSerde;

use crate::r4::{Extension, Quantity};

/// FHIR Range type
///
/// A set of ordered Quantities defined by a low and high limit.
///
/// See: [Range](http://hl7.org/fhir/StructureDefinition/Range)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Range {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
}
