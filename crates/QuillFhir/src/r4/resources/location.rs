use quill_macros::FhirSerde;

use crate::r4::{
    Address, Boolean, Code, CodeableConcept, Coding, ContactPoint, Decimal, Extension,
    FhirString, Id, Identifier, Meta, Narrative, Reference, Resource, Time, Uri,
};

/// FHIR Location resource
///
/// Details and position information for a physical place.
///
/// See: [Location](http://hl7.org/fhir/StructureDefinition/Location)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource_type = "Location")]
pub struct Location {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// active | suspended | inactive
    pub status: Option<Code>,
    pub operational_status: Option<Coding>,
    pub name: Option<FhirString>,
    pub alias: Vec<FhirString>,
    pub description: Option<FhirString>,
    /// instance | kind
    pub mode: Option<Code>,
    #[fhir_serde(rename = "type")]
    pub type_: Vec<CodeableConcept>,
    pub telecom: Vec<ContactPoint>,
    pub address: Option<Address>,
    pub physical_type: Option<CodeableConcept>,
    pub position: Option<LocationPosition>,
    pub managing_organization: Option<Reference>,
    pub part_of: Option<Reference>,
    pub hours_of_operation: Vec<LocationHoursOfOperation>,
    pub availability_exceptions: Option<FhirString>,
    pub endpoint: Vec<Reference>,
}

/// The absolute geographic location (WGS84)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct LocationPosition {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub longitude: Option<Decimal>,
    pub latitude: Option<Decimal>,
    pub altitude: Option<Decimal>,
}

/// What days/times during a week is this location usually open
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct LocationHoursOfOperation {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// mon | tue | wed | thu | fri | sat | sun
    pub days_of_week: Vec<Code>,
    pub all_day: Option<Boolean>,
    pub opening_time: Option<Time>,
    pub closing_time: Option<Time>,
}
