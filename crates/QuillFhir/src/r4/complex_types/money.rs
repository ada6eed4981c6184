use quill_macros::FhirSerde;

use crate::r4::{Code, Decimal, Extension};

/// FHIR Money type
///
/// See: [Money](http://hl7.org/fhir/StructureDefinition/Money)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Money {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub value: Option<Decimal>,
    /// ISO 4217 Currency Code
    pub currency: Option<Code>,
}
