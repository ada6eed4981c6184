use quill_macros::FhirSerde;

use crate::r4::{
    Boolean, Canonical, Code, CodeableConcept, Coding, ContactDetail, Date, DateTime,
    DynamicValue, Extension, FhirString, Id, Identifier, Integer, Markdown, Meta, Narrative,
    Resource, Uri, UsageContext,
};

/// FHIR ValueSet resource
///
/// A set of codes drawn from one or more code systems, intended for use in
/// a particular context.
///
/// See: [ValueSet](http://hl7.org/fhir/StructureDefinition/ValueSet)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "ValueSet")]
pub struct ValueSet {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// Canonical identifier for this value set
    pub url: Option<Uri>,
    pub identifier: Vec<Identifier>,
    pub version: Option<FhirString>,
    pub name: Option<FhirString>,
    pub title: Option<FhirString>,
    /// draft | active | retired | unknown
    pub status: Option<Code>,
    pub experimental: Option<Boolean>,
    pub date: Option<DateTime>,
    pub publisher: Option<FhirString>,
    pub contact: Vec<ContactDetail>,
    pub description: Option<Markdown>,
    pub use_context: Vec<UsageContext>,
    pub jurisdiction: Vec<CodeableConcept>,
    pub immutable: Option<Boolean>,
    pub purpose: Option<Markdown>,
    pub copyright: Option<Markdown>,
    pub compose: Option<ValueSetCompose>,
    pub expansion: Option<ValueSetExpansion>,
}

/// Content logical definition of the value set (CLD)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetCompose {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub locked_date: Option<Date>,
    pub inactive: Option<Boolean>,
    pub include: Vec<ValueSetComposeInclude>,
    /// Explicitly exclude codes from a code system or other value sets
    pub exclude: Vec<ValueSetComposeInclude>,
}

/// Include one or more codes from a code system or other value set(s)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetComposeInclude {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub system: Option<Uri>,
    pub version: Option<FhirString>,
    pub concept: Vec<ValueSetComposeIncludeConcept>,
    pub filter: Vec<ValueSetComposeIncludeFilter>,
    /// Select the contents included in this value set
    pub value_set: Vec<Canonical>,
}

/// A concept defined in the system
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetComposeIncludeConcept {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub code: Option<Code>,
    pub display: Option<FhirString>,
    pub designation: Vec<ValueSetDesignation>,
}

/// Additional representations for this concept
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetDesignation {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub language: Option<Code>,
    #[fhir_serde(rename = "use")]
    pub use_: Option<Coding>,
    pub value: Option<FhirString>,
}

/// Select codes/concepts by their properties (including relationships)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetComposeIncludeFilter {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub property: Option<Code>,
    /// = | is-a | descendent-of | is-not-a | regex | in | not-in | generalizes | exists
    pub op: Option<Code>,
    pub value: Option<FhirString>,
}

/// Used when the value set is "expanded"
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetExpansion {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Option<Uri>,
    pub timestamp: Option<DateTime>,
    pub total: Option<Integer>,
    pub offset: Option<Integer>,
    pub parameter: Vec<ValueSetExpansionParameter>,
    pub contains: Vec<ValueSetExpansionContains>,
}

/// Parameter that controlled the expansion process
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetExpansionParameter {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub name: Option<FhirString>,
    /// Value of the named parameter (string | boolean | integer | decimal | uri | code | dateTime)
    #[fhir_serde(choice = "value")]
    pub value: Option<DynamicValue>,
}

/// Codes in the value set
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetExpansionContains {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub system: Option<Uri>,
    /// If user cannot select this entry
    #[fhir_serde(rename = "abstract")]
    pub is_abstract: Option<Boolean>,
    pub inactive: Option<Boolean>,
    pub version: Option<FhirString>,
    pub code: Option<Code>,
    pub display: Option<FhirString>,
    pub designation: Vec<ValueSetDesignation>,
    /// Codes contained under this entry
    pub contains: Vec<ValueSetExpansionContains>,
}
