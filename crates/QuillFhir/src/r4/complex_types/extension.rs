use quill_macros::FhirSerde;
use serde_json::{Map, Value};

use crate::r4::DynamicValue;

/// FHIR Extension type
///
/// Optional additional information attached to any element. The value is
/// an `[x]` choice; members that do not match a registered value type
/// (for example `valueFoo` or vendor children) are kept verbatim in
/// [`Extension::other`] so they survive a round trip.
///
/// See: [Extension](http://hl7.org/fhir/StructureDefinition/Extension)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Extension {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Identifies the meaning of the extension
    pub url: Option<String>,
    #[fhir_serde(choice = "value")]
    pub value: Option<DynamicValue>,
    /// Unrecognized members, in document order
    #[fhir_serde(other)]
    pub other: Map<String, Value>,
}

impl Extension {
    pub fn new(url: impl Into<String>, value: DynamicValue) -> Self {
        Self {
            url: Some(url.into()),
            value: Some(value),
            ..Default::default()
        }
    }
}
