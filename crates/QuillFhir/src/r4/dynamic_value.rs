//! Choice-type (`[x]`) registry and codec.
//!
//! Every data type that may appear in an `[x]` field is listed once in the
//! `dynamic_value_registry!` table below. The table generates the
//! [`DynamicValueType`] tag, the [`DynamicValue`] payload enum, and the
//! suffix mapping used to build member names such as `valueQuantity`.

use serde_json::{Map, Value};

use crate::codec::{DecodeResult, FhirJson, JsonPath};
use crate::r4::*;

macro_rules! dynamic_value_registry {
    ($($variant:ident => $payload:ty),+ $(,)?) => {
        /// Tag naming which data type a [`DynamicValue`] holds.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum DynamicValueType {
            $($variant),+
        }

        impl DynamicValueType {
            /// Every registered tag, in registry order.
            pub const ALL: &'static [DynamicValueType] = &[$(DynamicValueType::$variant),+];

            /// The PascalCase suffix appended to a choice prefix.
            pub const fn suffix(self) -> &'static str {
                match self {
                    $(DynamicValueType::$variant => stringify!($variant)),+
                }
            }

            pub fn from_suffix(suffix: &str) -> Option<Self> {
                match suffix {
                    $(stringify!($variant) => Some(DynamicValueType::$variant),)+
                    _ => None,
                }
            }

            /// Decodes a choice member and its `_` twin as this type.
            pub fn decode(
                self,
                value: Option<&Value>,
                extension: Option<&Value>,
                path: &JsonPath<'_>,
            ) -> DecodeResult<Option<DynamicValue>> {
                match self {
                    $(DynamicValueType::$variant => Ok(
                        <$payload as FhirJson>::from_json_parts(value, extension, path)?
                            .map(DynamicValue::$variant)
                    ),)+
                }
            }
        }

        /// A value held by an `[x]` field. The variant is the type tag.
        #[derive(Debug, Clone, PartialEq)]
        pub enum DynamicValue {
            $($variant($payload)),+
        }

        impl DynamicValue {
            pub fn value_type(&self) -> DynamicValueType {
                match self {
                    $(DynamicValue::$variant(_) => DynamicValueType::$variant),+
                }
            }

            pub fn to_json_parts(&self) -> (Option<Value>, Option<Value>) {
                match self {
                    $(DynamicValue::$variant(payload) => payload.to_json_parts()),+
                }
            }
        }
    };
}

// Complex payloads are boxed: several of them hold choice fields themselves.
dynamic_value_registry! {
    Base64Binary => Base64Binary,
    Boolean => Boolean,
    Canonical => Canonical,
    Code => Code,
    Date => Date,
    DateTime => DateTime,
    Decimal => Decimal,
    Id => Id,
    Instant => Instant,
    Integer => Integer,
    Markdown => Markdown,
    Oid => Oid,
    PositiveInt => PositiveInt,
    String => FhirString,
    Time => Time,
    UnsignedInt => UnsignedInt,
    Uri => Uri,
    Url => Url,
    Uuid => Uuid,
    Address => Box<Address>,
    Age => Box<Age>,
    Annotation => Box<Annotation>,
    Attachment => Box<Attachment>,
    CodeableConcept => Box<CodeableConcept>,
    Coding => Box<Coding>,
    ContactPoint => Box<ContactPoint>,
    Count => Box<Count>,
    Distance => Box<Distance>,
    Duration => Box<Duration>,
    HumanName => Box<HumanName>,
    Identifier => Box<Identifier>,
    Money => Box<Money>,
    Period => Box<Period>,
    Quantity => Box<Quantity>,
    Range => Box<Range>,
    Ratio => Box<Ratio>,
    Reference => Box<Reference>,
    SampledData => Box<SampledData>,
    Signature => Box<Signature>,
    Timing => Box<Timing>,
    ContactDetail => Box<ContactDetail>,
    Contributor => Box<Contributor>,
    DataRequirement => Box<DataRequirement>,
    Expression => Box<Expression>,
    ParameterDefinition => Box<ParameterDefinition>,
    RelatedArtifact => Box<RelatedArtifact>,
    TriggerDefinition => Box<TriggerDefinition>,
    UsageContext => Box<UsageContext>,
    Dosage => Box<Dosage>,
    Meta => Box<Meta>,
}

/// Returns the tag when `key` is exactly `prefix` followed by a registered
/// suffix. `valueSet` is not a choice key for `value`.
pub fn choice_type_of(key: &str, prefix: &str) -> Option<DynamicValueType> {
    key.strip_prefix(prefix)
        .and_then(DynamicValueType::from_suffix)
}

/// Reads the `[x]` field named by `prefix` from `object`.
///
/// Keys are scanned in document order and the first `prefix + Suffix` (or
/// its `_` twin) holding something other than `null` decides the type.
/// Further keys for a different type are ignored with a warning.
pub fn read_choice(
    object: &Map<String, Value>,
    prefix: &str,
    path: &JsonPath<'_>,
) -> DecodeResult<Option<DynamicValue>> {
    let mut chosen: Option<(DynamicValueType, &str)> = None;
    for (key, value) in object {
        if value.is_null() {
            continue;
        }
        let base = key.strip_prefix('_').unwrap_or(key);
        let Some(tag) = choice_type_of(base, prefix) else {
            continue;
        };
        match chosen {
            None => chosen = Some((tag, base)),
            Some((first, kept)) if first != tag => {
                tracing::warn!(
                    prefix,
                    kept = %kept,
                    ignored = %key,
                    path = %path,
                    "multiple choice members present, keeping the first"
                );
            }
            Some(_) => {}
        }
    }

    let Some((tag, key)) = chosen else {
        return Ok(None);
    };
    let value = object.get(key).filter(|value| !value.is_null());
    let extension = object
        .get(&format!("_{key}"))
        .filter(|value| !value.is_null());
    tag.decode(value, extension, &path.field(key))
}

/// Writes `value` under `prefix + suffix`, plus the `_` twin when the
/// primitive carries an id or extensions.
pub fn write_choice(object: &mut Map<String, Value>, prefix: &str, value: &Option<DynamicValue>) {
    let Some(value) = value else {
        return;
    };
    let key = format!("{prefix}{}", value.value_type().suffix());
    let (main, extension) = value.to_json_parts();
    let twin = format!("_{key}");
    if let Some(main) = main {
        object.insert(key, main);
    }
    if let Some(extension) = extension {
        object.insert(twin, extension);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::collections::HashSet;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_suffix_round_trip_for_every_tag() {
        for &tag in DynamicValueType::ALL {
            assert_eq!(DynamicValueType::from_suffix(tag.suffix()), Some(tag));
        }
    }

    #[test]
    fn test_suffixes_are_unique() {
        let suffixes: HashSet<_> = DynamicValueType::ALL.iter().map(|t| t.suffix()).collect();
        assert_eq!(suffixes.len(), DynamicValueType::ALL.len());
    }

    #[test]
    fn test_quantity_aliases_have_distinct_tags() {
        let age = DynamicValue::Age(Box::new(Quantity::default()));
        let quantity = DynamicValue::Quantity(Box::new(Quantity::default()));
        assert_eq!(age.value_type().suffix(), "Age");
        assert_eq!(quantity.value_type().suffix(), "Quantity");
    }

    #[test]
    fn test_choice_key_requires_registered_suffix() {
        assert_eq!(choice_type_of("valueString", "value"), Some(DynamicValueType::String));
        assert_eq!(choice_type_of("valueSet", "value"), None);
        assert_eq!(choice_type_of("value", "value"), None);
        assert_eq!(choice_type_of("valuestring", "value"), None);
        assert_eq!(choice_type_of("effectiveString", "value"), None);
    }

    #[test]
    fn test_read_absent_choice() {
        let map = object(json!({"status": "final", "valueSet": "x"}));
        assert_eq!(read_choice(&map, "value", &JsonPath::root()).unwrap(), None);
    }

    #[test]
    fn test_read_quantity_choice() {
        let map = object(json!({
            "valueQuantity": {"value": 6.3, "unit": "mmol/l"}
        }));
        let value = read_choice(&map, "value", &JsonPath::root()).unwrap().unwrap();
        let DynamicValue::Quantity(quantity) = value else {
            panic!("expected a Quantity");
        };
        assert_eq!(
            quantity.value.as_ref().and_then(|v| v.value.as_ref()).and_then(|d| d.value()),
            Some(dec!(6.3))
        );
    }

    #[test]
    fn test_read_primitive_choice_with_twin() {
        let map = object(json!({
            "_valueString": {"id": "v1"},
            "valueString": "hello"
        }));
        let value = read_choice(&map, "value", &JsonPath::root()).unwrap();
        let Some(DynamicValue::String(text)) = value else {
            panic!("expected a string");
        };
        assert_eq!(text.value.as_deref(), Some("hello"));
        assert_eq!(text.id.as_deref(), Some("v1"));
    }

    #[test]
    fn test_first_choice_wins() {
        let map = object(json!({"valueBoolean": true, "valueString": "x"}));
        let value = read_choice(&map, "value", &JsonPath::root()).unwrap();
        assert_eq!(value, Some(DynamicValue::Boolean(Boolean::from(true))));
    }

    #[test]
    fn test_null_member_does_not_claim_choice() {
        let map = object(json!({"valueString": null, "valueBoolean": true}));
        let value = read_choice(&map, "value", &JsonPath::root()).unwrap();
        assert_eq!(value, Some(DynamicValue::Boolean(Boolean::from(true))));
    }

    #[test]
    fn test_null_value_with_twin_keeps_twin() {
        let map = object(json!({"valueCode": null, "_valueCode": {"id": "c1"}}));
        let value = read_choice(&map, "value", &JsonPath::root()).unwrap();
        let Some(DynamicValue::Code(code)) = value else {
            panic!("expected a code");
        };
        assert_eq!(code.value, None);
        assert_eq!(code.id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_bad_payload_reports_path() {
        let root = JsonPath::Root("Observation");
        let map = object(json!({"valueQuantity": "x"}));
        let error = read_choice(&map, "value", &root).unwrap_err();
        assert_eq!(error.path(), "Observation.valueQuantity");
        assert_eq!(
            error.kind(),
            &DecodeErrorKind::InvalidType {
                expected: "object",
                found: "string"
            }
        );
    }

    #[test]
    fn test_write_choice() {
        let mut map = Map::new();
        write_choice(&mut map, "onset", &Some(DynamicValue::String("22".into())));
        write_choice(&mut map, "abatement", &None);
        assert_eq!(Value::Object(map), json!({"onsetString": "22"}));
    }

    #[test]
    fn test_write_choice_twin() {
        let value = DynamicValue::Code(Code {
            id: Some("c1".to_string()),
            ..Default::default()
        });
        let mut map = Map::new();
        write_choice(&mut map, "value", &Some(value));
        assert_eq!(Value::Object(map), json!({"_valueCode": {"id": "c1"}}));
    }
}
