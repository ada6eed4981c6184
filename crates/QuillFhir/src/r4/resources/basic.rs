use quill_macros::FhirSerde;

use crate::r4::{
    Code, CodeableConcept, Date, Extension, Id, Identifier, Meta, Narrative, Reference, Resource,
    Uri,
};

/// FHIR Basic resource
///
/// Basic is used for handling concepts not yet defined in FHIR, narrative-only
/// resources that don't map to an existing resource, and custom resources not
/// appropriate for inclusion in the FHIR specification.
///
/// See: [Basic](http://hl7.org/fhir/StructureDefinition/Basic)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Basic")]
pub struct Basic {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// Kind of Resource
    pub code: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub created: Option<Date>,
    pub author: Option<Reference>,
}
