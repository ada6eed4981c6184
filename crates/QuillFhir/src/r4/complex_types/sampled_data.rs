use quill_macros::FhirSerde;

use crate::r4::{Decimal, Extension, FhirString, PositiveInt, Quantity};

/// FHIR SampledData type
///
/// A series of measurements taken by a device.
///
/// See: [SampledData](http://hl7.org/fhir/StructureDefinition/SampledData)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct SampledData {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Zero value and units
    pub origin: Option<Quantity>,
    /// Number of milliseconds between samples
    pub period: Option<Decimal>,
    pub factor: Option<Decimal>,
    pub lower_limit: Option<Decimal>,
    pub upper_limit: Option<Decimal>,
    pub dimensions: Option<PositiveInt>,
    /// Decimal values with spaces, or "E" | "U" | "L"
    pub data: Option<FhirString>,
}
