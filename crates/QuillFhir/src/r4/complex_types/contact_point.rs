use quill_macros::FhirSerde;

use crate::r4::{Code, Extension, FhirString, Period, PositiveInt};

/// FHIR ContactPoint type
///
/// Details for all kinds of technology mediated contact points.
///
/// See: [ContactPoint](http://hl7.org/fhir/StructureDefinition/ContactPoint)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ContactPoint {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// phone | fax | email | pager | url | sms | other
    pub system: Option<Code>,
    pub value: Option<FhirString>,
    #[fhir_serde(rename = "use")]
    pub use_: Option<Code>,
    /// Specify preferred order of use (1 = highest)
    pub rank: Option<PositiveInt>,
    pub period: Option<Period>,
}
