use quill_macros::FhirSerde;

use crate::r4::{Code, Decimal, Extension, FhirString, Uri};

/// FHIR Quantity type
///
/// A measured amount, or an amount that can potentially be measured.
///
/// See: [Quantity](http://hl7.org/fhir/StructureDefinition/Quantity)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Quantity {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Numerical value, with implicit precision
    pub value: Option<Decimal>,
    /// < | <= | >= | >
    pub comparator: Option<Code>,
    pub unit: Option<FhirString>,
    pub system: Option<Uri>,
    /// Coded form of the unit
    pub code: Option<Code>,
}

// Profiles of Quantity share its structure; the choice registry still gives
// each its own tag.
pub type Age = Quantity;
pub type Count = Quantity;
pub type Distance = Quantity;
pub type Duration = Quantity;
pub type SimpleQuantity = Quantity;
