//! R4 primitive data types.
//!
//! Each primitive is an [`Element`] around a Rust value type, so every
//! primitive can carry an element id and extensions.

use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use crate::element::Element;
use crate::precise_decimal::PreciseDecimal;
use crate::r4::Extension;

pub type Boolean = Element<bool, Extension>;
pub type Integer = Element<i32, Extension>;
pub type UnsignedInt = Element<u32, Extension>;
pub type PositiveInt = Element<u32, Extension>;
pub type Decimal = Element<PreciseDecimal, Extension>;

pub type FhirString = Element<String, Extension>;
pub type Code = Element<String, Extension>;
pub type Id = Element<String, Extension>;
pub type Uri = Element<String, Extension>;
pub type Url = Element<String, Extension>;
pub type Canonical = Element<String, Extension>;
pub type Oid = Element<String, Extension>;
pub type Uuid = Element<String, Extension>;
pub type Markdown = Element<String, Extension>;
pub type Base64Binary = Element<String, Extension>;
pub type Xhtml = Element<String, Extension>;

pub type Date = Element<PrecisionDate, Extension>;
pub type DateTime = Element<PrecisionDateTime, Extension>;
pub type Instant = Element<PrecisionInstant, Extension>;
pub type Time = Element<PrecisionTime, Extension>;
