use quill_macros::FhirSerde;

use crate::r4::{
    Code, Decimal, Extension, FhirString, Id, Identifier, Instant, Meta, Resource, Signature,
    UnsignedInt, Uri,
};

/// FHIR Bundle resource
///
/// A container for a collection of resources. Entries hold arbitrary
/// resources, decoded through the same dispatch as top-level documents.
///
/// See: [Bundle](http://hl7.org/fhir/StructureDefinition/Bundle)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Bundle")]
pub struct Bundle {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub identifier: Option<Identifier>,
    /// document | message | transaction | transaction-response | batch | batch-response | history | searchset | collection
    #[fhir_serde(rename = "type")]
    pub type_: Option<Code>,
    pub timestamp: Option<Instant>,
    /// If search, the total number of matches
    pub total: Option<UnsignedInt>,
    pub link: Vec<BundleLink>,
    pub entry: Vec<BundleEntry>,
    pub signature: Option<Signature>,
}

/// Links related to this Bundle
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct BundleLink {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub relation: Option<FhirString>,
    pub url: Option<Uri>,
}

/// Entry in the bundle - will have a resource or information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct BundleEntry {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub link: Vec<BundleLink>,
    pub full_url: Option<Uri>,
    pub resource: Option<Box<Resource>>,
    pub search: Option<BundleEntrySearch>,
    pub request: Option<BundleEntryRequest>,
    pub response: Option<BundleEntryResponse>,
}

/// Search related information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct BundleEntrySearch {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// match | include | outcome
    pub mode: Option<Code>,
    pub score: Option<Decimal>,
}

/// Additional execution information (transaction/batch/history)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct BundleEntryRequest {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// GET | HEAD | POST | PUT | DELETE | PATCH
    pub method: Option<Code>,
    pub url: Option<Uri>,
    pub if_none_match: Option<FhirString>,
    pub if_modified_since: Option<Instant>,
    pub if_match: Option<FhirString>,
    pub if_none_exist: Option<FhirString>,
}

/// Results of execution (transaction/batch/history)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct BundleEntryResponse {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub status: Option<FhirString>,
    pub location: Option<Uri>,
    pub etag: Option<FhirString>,
    pub last_modified: Option<Instant>,
    /// OperationOutcome with hints and warnings (for batch/transaction)
    pub outcome: Option<Box<Resource>>,
}
