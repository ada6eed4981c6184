use quill_macros::FhirSerde;

use crate::r4::{Extension, Quantity};

/// FHIR Ratio type
///
/// See: [Ratio](http://hl7.org/fhir/StructureDefinition/Ratio)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Ratio {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
}
