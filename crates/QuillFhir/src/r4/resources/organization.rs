use quill_macros::FhirSerde;

use crate::r4::{
    Address, Boolean, Code, CodeableConcept, ContactPoint, Extension, FhirString, HumanName, Id,
    Identifier, Meta, Narrative, Reference, Resource, Uri,
};

/// FHIR Organization resource
///
/// A formally or informally recognized grouping of people or organizations.
///
/// See: [Organization](http://hl7.org/fhir/StructureDefinition/Organization)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Organization")]
pub struct Organization {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub active: Option<Boolean>,
    #[fhir_serde(rename = "type")]
    pub type_: Vec<CodeableConcept>,
    pub name: Option<FhirString>,
    pub alias: Vec<FhirString>,
    pub telecom: Vec<ContactPoint>,
    pub address: Vec<Address>,
    /// The organization of which this organization forms a part
    pub part_of: Option<Reference>,
    pub contact: Vec<OrganizationContact>,
    pub endpoint: Vec<Reference>,
}

/// Contact for the organization for a certain purpose
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct OrganizationContact {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub purpose: Option<CodeableConcept>,
    pub name: Option<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub address: Option<Address>,
}
