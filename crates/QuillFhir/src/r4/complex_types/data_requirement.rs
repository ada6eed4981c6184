use quill_macros::FhirSerde;

use crate::r4::{
    Canonical, Code, Coding, DynamicValue, Extension, FhirString, PositiveInt,
};

/// FHIR DataRequirement type
///
/// Describes a required data item for evaluation in terms of the type of
/// data, and optional code or date-based filters of the data.
///
/// See: [DataRequirement](http://hl7.org/fhir/StructureDefinition/DataRequirement)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DataRequirement {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// The type of the required data
    #[fhir_serde(rename = "type")]
    pub type_: Option<Code>,
    pub profile: Vec<Canonical>,
    /// CodeableConcept | Reference
    #[fhir_serde(choice = "subject")]
    pub subject: Option<DynamicValue>,
    pub must_support: Vec<FhirString>,
    pub code_filter: Vec<DataRequirementCodeFilter>,
    pub date_filter: Vec<DataRequirementDateFilter>,
    pub limit: Option<PositiveInt>,
    pub sort: Vec<DataRequirementSort>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DataRequirementCodeFilter {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub path: Option<FhirString>,
    pub search_param: Option<FhirString>,
    pub value_set: Option<Canonical>,
    pub code: Vec<Coding>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DataRequirementDateFilter {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub path: Option<FhirString>,
    pub search_param: Option<FhirString>,
    /// dateTime | Period | Duration
    #[fhir_serde(choice = "value")]
    pub value: Option<DynamicValue>,
}

/// Order of the results
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DataRequirementSort {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub path: Option<FhirString>,
    /// ascending | descending
    pub direction: Option<Code>,
}
