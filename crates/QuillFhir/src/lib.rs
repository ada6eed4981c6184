//! Typed FHIR R4 model with a JSON codec that keeps documents intact.
//!
//! Choice (`[x]`) members, primitive `_name` twins, decimal precision and
//! resources or extension values this crate does not model all survive a
//! read-modify-write cycle.
//!
//! ```rust
//! use quill_fhir::json::{from_json_str, to_json_string};
//! use quill_fhir::r4::{DynamicValue, Resource};
//!
//! let text = r#"{"resourceType":"Observation","status":"final","valueQuantity":{"value":1.50,"unit":"mmol/L"}}"#;
//! let resource: Resource = from_json_str(text).unwrap();
//! let Resource::Observation(observation) = &resource else { unreachable!() };
//! assert!(matches!(observation.value, Some(DynamicValue::Quantity(_))));
//! assert_eq!(to_json_string(&resource).unwrap(), text);
//! ```

pub mod codec;
pub mod date_time;
pub mod element;
pub mod error;
pub mod json;
pub mod precise_decimal;
pub mod r4;

pub use codec::{FhirJson, JsonPath, NamedResource};
pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime, TimePrecision,
};
pub use element::{Element, PrimitiveValue};
pub use error::{DecodeError, DecodeErrorKind, Error, Result};
pub use precise_decimal::PreciseDecimal;
