use serde_json::{Map, Value};

use crate::codec::{
    expect_object, json_kind, read_list, read_optional, trace_unrecognized, write_list,
    write_optional, DecodeResult, FhirJson, JsonPath,
};
use crate::error::{DecodeError, DecodeErrorKind};

/// Generic element container supporting FHIR's extension mechanism.
///
/// In FHIR, primitive elements can carry an `id` and `extension` list in
/// addition to their value. In JSON the value and the metadata travel in
/// two sibling members:
///
/// ```json
/// { "birthDate": "1974-12-25", "_birthDate": { "id": "bd1" } }
/// ```
///
/// # Type Parameters
///
/// * `V` - The value type (e.g., `String`, `i32`, `PreciseDecimal`)
/// * `E` - The extension type (the R4 `Extension` struct)
///
/// # Examples
///
/// ```rust
/// use quill_fhir::r4::FhirString;
///
/// let simple = FhirString::from("Hello World");
/// assert_eq!(simple.value.as_deref(), Some("Hello World"));
///
/// let extension_only = FhirString {
///     id: Some("disabled-element".to_string()),
///     ..Default::default()
/// };
/// assert!(extension_only.value.is_none());
/// ```
///
/// An element with no value, id or extensions is empty and is never written.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Element<V, E> {
    /// Optional element identifier for referencing within the resource
    pub id: Option<String>,
    /// Extensions providing additional metadata
    pub extension: Vec<E>,
    /// The actual primitive value
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    pub fn new(value: V) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_empty()
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<E> From<&str> for Element<String, E> {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}

/// Members of a primitive's `_name` twin.
const TWIN_KEYS: &[&str] = &["id", "extension"];

/// A value type that can sit inside an [`Element`].
pub trait PrimitiveValue: Sized {
    fn from_json_value(value: &Value) -> Result<Self, DecodeErrorKind>;

    fn to_json_value(&self) -> Value;
}

fn wrong_type(expected: &'static str, found: &Value) -> DecodeErrorKind {
    DecodeErrorKind::InvalidType {
        expected,
        found: json_kind(found),
    }
}

impl PrimitiveValue for String {
    fn from_json_value(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::String(text) => Ok(text.clone()),
            other => Err(wrong_type("string", other)),
        }
    }

    fn to_json_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl PrimitiveValue for bool {
    fn from_json_value(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::Bool(flag) => Ok(*flag),
            other => Err(wrong_type("boolean", other)),
        }
    }

    fn to_json_value(&self) -> Value {
        Value::Bool(*self)
    }
}

// Integers are also accepted in string form, e.g. "42".
fn integer_text(value: &Value) -> Result<String, DecodeErrorKind> {
    match value {
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text.clone()),
        other => Err(wrong_type("integer", other)),
    }
}

impl PrimitiveValue for i32 {
    fn from_json_value(value: &Value) -> Result<Self, DecodeErrorKind> {
        let text = integer_text(value)?;
        text.parse().map_err(|_| DecodeErrorKind::InvalidValue {
            expected: "integer",
            value: text,
        })
    }

    fn to_json_value(&self) -> Value {
        Value::from(*self)
    }
}

impl PrimitiveValue for u32 {
    fn from_json_value(value: &Value) -> Result<Self, DecodeErrorKind> {
        let text = integer_text(value)?;
        text.parse().map_err(|_| DecodeErrorKind::InvalidValue {
            expected: "unsigned integer",
            value: text,
        })
    }

    fn to_json_value(&self) -> Value {
        Value::from(*self)
    }
}

impl<V, E> FhirJson for Element<V, E>
where
    V: PrimitiveValue,
    E: FhirJson,
{
    fn from_json(value: &Value, path: &JsonPath<'_>) -> DecodeResult<Self> {
        Ok(Self::from_json_parts(Some(value), None, path)?.unwrap_or_default())
    }

    fn to_json(&self) -> Value {
        self.value
            .as_ref()
            .map_or(Value::Null, PrimitiveValue::to_json_value)
    }

    fn from_json_parts(
        value: Option<&Value>,
        extension: Option<&Value>,
        path: &JsonPath<'_>,
    ) -> DecodeResult<Option<Self>> {
        let value = value
            .map(|value| V::from_json_value(value).map_err(|kind| DecodeError::new(path, kind)))
            .transpose()?;
        let (id, extension) = match extension {
            Some(twin) => {
                let object = expect_object(twin, path)?;
                trace_unrecognized(object, TWIN_KEYS, &[], "Element", path);
                (
                    read_optional::<String>(object, "id", "_id", path)?,
                    read_list::<E>(object, "extension", "_extension", path)?,
                )
            }
            None => (None, Vec::new()),
        };
        let element = Element {
            id,
            extension,
            value,
        };
        Ok((!element.is_empty()).then_some(element))
    }

    fn to_json_parts(&self) -> (Option<Value>, Option<Value>) {
        let value = self.value.as_ref().map(PrimitiveValue::to_json_value);
        if self.id.is_none() && self.extension.is_empty() {
            return (value, None);
        }
        let mut twin = Map::new();
        write_optional(&mut twin, "id", "_id", &self.id);
        write_list(&mut twin, "extension", "_extension", &self.extension);
        (value, Some(Value::Object(twin)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::{Extension, FhirString, Integer, UnsignedInt};
    use serde_json::json;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_value_only() {
        let element = FhirString::from_json(&json!("text"), &JsonPath::root()).unwrap();
        assert_eq!(element, FhirString::from("text"));
        assert_eq!(element.to_json_parts(), (Some(json!("text")), None));
    }

    #[test]
    fn test_twin_only() {
        let twin = json!({
            "id": "a1",
            "extension": [{"url": "http://example.org/why", "valueCode": "masked"}]
        });
        let element = FhirString::from_json_parts(None, Some(&twin), &JsonPath::root())
            .unwrap()
            .unwrap();
        assert_eq!(element.value, None);
        assert_eq!(element.id.as_deref(), Some("a1"));
        assert_eq!(element.extension.len(), 1);
        assert_eq!(element.to_json_parts(), (None, Some(twin)));
    }

    #[test]
    fn test_empty_twin_yields_nothing() {
        let element =
            FhirString::from_json_parts(None, Some(&json!({})), &JsonPath::root()).unwrap();
        assert!(element.is_none());
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unrecognized_twin_member_is_logged() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let twin = json!({"id": "a1", "vendorFlag": true});
        let element = tracing::subscriber::with_default(subscriber, || {
            FhirString::from_json_parts(Some(&json!("x")), Some(&twin), &JsonPath::root())
        })
        .unwrap()
        .unwrap();
        assert_eq!(element.id.as_deref(), Some("a1"));
        assert_eq!(element.to_json_parts().1, Some(json!({"id": "a1"})));

        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("ignoring unrecognized member"));
        assert!(logged.contains("vendorFlag"));
    }

    #[test]
    fn test_integer_accepts_numeric_string() {
        let element = Integer::from_json(&json!("42"), &JsonPath::root()).unwrap();
        assert_eq!(element.value, Some(42));
        assert_eq!(element.to_json(), json!(42));
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let error = Integer::from_json(&json!(4.5), &JsonPath::root()).unwrap_err();
        assert!(matches!(
            error.kind(),
            DecodeErrorKind::InvalidValue { expected: "integer", .. }
        ));
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        assert!(UnsignedInt::from_json(&json!(-1), &JsonPath::root()).is_err());
    }

    #[test]
    fn test_string_rejects_object() {
        let error = FhirString::from_json(&json!({"a": 1}), &JsonPath::root()).unwrap_err();
        assert_eq!(
            error.kind(),
            &DecodeErrorKind::InvalidType {
                expected: "string",
                found: "object"
            }
        );
    }

    #[test]
    fn test_is_empty() {
        let mut element: Element<bool, Extension> = Element::default();
        assert!(element.is_empty());
        element.id = Some("x".to_string());
        assert!(!element.is_empty());
    }
}
