use quill_macros::FhirSerde;

use crate::r4::{Code, DynamicValue, Extension, FhirString, Id, Meta, Resource, Uri};

/// FHIR Parameters resource
///
/// The input or output of an operation. Each parameter holds a value, a
/// resource, or nested parts.
///
/// See: [Parameters](http://hl7.org/fhir/StructureDefinition/Parameters)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Parameters")]
pub struct Parameters {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub parameter: Vec<ParametersParameter>,
}

impl Parameters {
    /// Returns the first top-level parameter with the given name.
    pub fn get(&self, name: &str) -> Option<&ParametersParameter> {
        self.parameter.iter().find(|parameter| parameter.is_named(name))
    }
}

/// Operation Parameter
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ParametersParameter {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub name: Option<FhirString>,
    /// If parameter is a data type
    #[fhir_serde(choice = "value")]
    pub value: Option<DynamicValue>,
    /// If parameter is a whole resource
    pub resource: Option<Box<Resource>>,
    /// Named part of a multi-part parameter
    pub part: Vec<ParametersParameter>,
}

impl ParametersParameter {
    pub fn is_named(&self, name: &str) -> bool {
        self.name
            .as_ref()
            .and_then(|n| n.value.as_deref())
            .is_some_and(|n| n == name)
    }

    /// Returns the first part with the given name.
    pub fn part(&self, name: &str) -> Option<&ParametersParameter> {
        self.part.iter().find(|part| part.is_named(name))
    }
}
