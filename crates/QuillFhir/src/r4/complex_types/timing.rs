use quill_macros::FhirSerde;

use crate::r4::{
    Code, CodeableConcept, DateTime, Decimal, DynamicValue, Extension, PositiveInt, Time,
    UnsignedInt,
};

/// FHIR Timing type
///
/// Specifies an event that may occur multiple times.
///
/// See: [Timing](http://hl7.org/fhir/StructureDefinition/Timing)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Timing {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// When the event occurs
    pub event: Vec<DateTime>,
    pub repeat: Option<TimingRepeat>,
    /// BID | TID | QID | AM | PM | QD | QOD | +
    pub code: Option<CodeableConcept>,
}

/// When the event is to occur
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct TimingRepeat {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Length/Range of lengths, or (Start and/or end) limits (Duration | Range | Period)
    #[fhir_serde(choice = "bounds")]
    pub bounds: Option<DynamicValue>,
    pub count: Option<PositiveInt>,
    pub count_max: Option<PositiveInt>,
    pub duration: Option<Decimal>,
    pub duration_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a
    pub duration_unit: Option<Code>,
    pub frequency: Option<PositiveInt>,
    pub frequency_max: Option<PositiveInt>,
    pub period: Option<Decimal>,
    pub period_max: Option<Decimal>,
    pub period_unit: Option<Code>,
    pub day_of_week: Vec<Code>,
    pub time_of_day: Vec<Time>,
    pub when: Vec<Code>,
    /// Minutes from event (before or after)
    pub offset: Option<UnsignedInt>,
}
