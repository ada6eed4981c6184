use quill_macros::FhirSerde;

use crate::r4::{
    Code, CodeableConcept, Extension, FhirString, Id, Meta, Narrative, Resource, Uri,
};

/// FHIR OperationOutcome resource
///
/// A collection of error, warning, or information messages that result from
/// a system action.
///
/// See: [OperationOutcome](http://hl7.org/fhir/StructureDefinition/OperationOutcome)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "OperationOutcome")]
pub struct OperationOutcome {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub issue: Vec<OperationOutcomeIssue>,
}

/// A single issue associated with the action
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct OperationOutcomeIssue {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// fatal | error | warning | information
    pub severity: Option<Code>,
    pub code: Option<Code>,
    pub details: Option<CodeableConcept>,
    pub diagnostics: Option<FhirString>,
    pub location: Vec<FhirString>,
    /// FHIRPath of element(s) related to issue
    pub expression: Vec<FhirString>,
}
