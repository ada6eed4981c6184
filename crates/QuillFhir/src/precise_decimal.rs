use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

use crate::element::PrimitiveValue;
use crate::error::DecodeErrorKind;

/// High-precision decimal type that preserves original string representation.
///
/// FHIR requires that decimal values maintain their original precision and format
/// when serialized back to JSON. This type stores both the parsed `Decimal` value
/// for arithmetic and the original text for serialization.
///
/// # FHIR Precision Requirements
///
/// FHIR decimal values must:
/// - Preserve trailing zeros (e.g., "12.340" vs "12.34")
/// - Maintain original precision during round-trip serialization
/// - Support high-precision arithmetic without floating-point errors
///
/// # Examples
///
/// ```rust
/// use quill_fhir::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// // Create from Decimal (derives string representation)
/// let precise = PreciseDecimal::from(Decimal::new(12340, 3)); // 12.340
/// assert_eq!(precise.original_string(), "12.340");
///
/// // Create with specific string format
/// let precise = PreciseDecimal::from_parts(
///     Some(Decimal::new(1000, 2)),
///     "10.00".to_string()
/// );
/// assert_eq!(precise.original_string(), "10.00");
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    /// The parsed decimal value, `None` if parsing failed (e.g., out of range)
    value: Option<Decimal>,
    /// The original string representation preserving format and precision
    original_string: Arc<str>,
}

/// Two `PreciseDecimal` values are equal if their parsed `Decimal` values are equal,
/// regardless of their original string representations.
///
/// ```rust
/// use quill_fhir::PreciseDecimal;
///
/// let a = PreciseDecimal::parse("10.0");
/// let b = PreciseDecimal::parse("10.00");
/// assert_eq!(a, b);
/// ```
impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// `None` (unparseable) sorts before any valid decimal.
impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl PreciseDecimal {
    /// Creates a new `PreciseDecimal` from its constituent parts.
    pub fn from_parts(value: Option<Decimal>, original_string: String) -> Self {
        Self {
            value,
            original_string: Arc::from(original_string),
        }
    }

    /// Parses decimal text, keeping it verbatim. Text outside the range of
    /// `Decimal` is kept with no parsed value.
    pub fn parse(s: &str) -> Self {
        Self {
            value: Self::parse_decimal_string(s),
            original_string: Arc::from(s),
        }
    }

    fn parse_decimal_string(s: &str) -> Option<Decimal> {
        // Normalize 'E' to 'e' for consistent parsing
        let normalized = s.replace('E', "e");

        if normalized.contains('e') {
            Decimal::from_scientific(&normalized).ok()
        } else {
            normalized.parse::<Decimal>().ok()
        }
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Returns the original string representation used for serialization.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            original_string: Arc::from(value.to_string()),
            value: Some(value),
        }
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl PrimitiveValue for PreciseDecimal {
    /// Accepts a JSON number or a numeric string. Numbers keep their exact
    /// lexical form because `serde_json` is built with `arbitrary_precision`.
    fn from_json_value(value: &Value) -> Result<Self, DecodeErrorKind> {
        let text = match value {
            Value::Number(number) => number.to_string(),
            Value::String(text) => text.clone(),
            other => {
                return Err(DecodeErrorKind::InvalidType {
                    expected: "decimal",
                    found: crate::codec::json_kind(other),
                });
            }
        };
        let decimal = Self::parse(&text);
        if decimal.value.is_none() && serde_json::from_str::<Number>(&text).is_err() {
            return Err(DecodeErrorKind::InvalidValue {
                expected: "decimal",
                value: text,
            });
        }
        Ok(decimal)
    }

    /// Writes the original text as a JSON number.
    fn to_json_value(&self) -> Value {
        match serde_json::from_str::<Number>(&self.original_string) {
            Ok(number) => Value::Number(number),
            Err(_) => Value::String(self.original_string.to_string()),
        }
    }
}
