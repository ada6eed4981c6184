use quill_macros::FhirSerde;
use serde_json::{Map, Value};

use crate::r4::{Canonical, Coding, Extension, Id, Instant, Uri};

/// FHIR Meta type
///
/// Metadata about a resource maintained by the infrastructure. Servers add
/// their own members here, so anything not modeled is kept in
/// [`Meta::other`].
///
/// See: [Meta](http://hl7.org/fhir/StructureDefinition/Meta)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Meta {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub version_id: Option<Id>,
    pub last_updated: Option<Instant>,
    pub source: Option<Uri>,
    /// Profiles this resource claims to conform to
    pub profile: Vec<Canonical>,
    pub security: Vec<Coding>,
    pub tag: Vec<Coding>,
    /// Unrecognized members, in document order
    #[fhir_serde(other)]
    pub other: Map<String, Value>,
}
