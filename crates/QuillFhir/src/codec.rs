//! Tree-level JSON codec shared by every FHIR type.
//!
//! Decoding works on an already parsed `serde_json::Value`. Each type
//! implements [`FhirJson`]; structs get their implementation from
//! `#[derive(FhirSerde)]`, which calls the helpers in this module once per
//! field. Primitive values and their `_name` twins are handed to
//! [`FhirJson::from_json_parts`] together so that `Element` can merge them.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeErrorKind};

pub use crate::r4::dynamic_value::{read_choice, write_choice};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Location of a value inside the document being decoded.
///
/// Paths are built on the stack as decoding descends and are only turned
/// into text when an error is reported.
#[derive(Debug, Clone, Copy)]
pub enum JsonPath<'a> {
    Root(&'a str),
    Field(&'a JsonPath<'a>, &'a str),
    Index(&'a JsonPath<'a>, usize),
}

impl<'a> JsonPath<'a> {
    pub const fn root() -> JsonPath<'static> {
        JsonPath::Root("$")
    }

    pub fn field<'b>(&'b self, name: &'b str) -> JsonPath<'b> {
        JsonPath::Field(self, name)
    }

    pub fn index(&self, index: usize) -> JsonPath<'_> {
        JsonPath::Index(self, index)
    }

    pub fn is_root(&self) -> bool {
        matches!(self, JsonPath::Root(_))
    }
}

impl fmt::Display for JsonPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonPath::Root(label) => f.write_str(label),
            JsonPath::Field(parent, name) => write!(f, "{parent}.{name}"),
            JsonPath::Index(parent, index) => write!(f, "{parent}[{index}]"),
        }
    }
}

/// Conversion between a FHIR type and its JSON tree form.
pub trait FhirJson: Sized {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> DecodeResult<Self>;

    fn to_json(&self) -> Value;

    /// Decodes from a member and its `_name` twin.
    ///
    /// Only primitives give the twin a meaning; everything else ignores it.
    /// Returns `None` when nothing worth keeping was present.
    fn from_json_parts(
        value: Option<&Value>,
        extension: Option<&Value>,
        path: &JsonPath<'_>,
    ) -> DecodeResult<Option<Self>> {
        let _ = extension;
        value.map(|value| Self::from_json(value, path)).transpose()
    }

    /// Encodes into a member and its `_name` twin. `None` parts are omitted.
    fn to_json_parts(&self) -> (Option<Value>, Option<Value>) {
        (Some(self.to_json()), None)
    }
}

/// Implemented by every modeled resource struct.
pub trait NamedResource {
    const RESOURCE_TYPE: &'static str;
}

impl<T: FhirJson> FhirJson for Box<T> {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> DecodeResult<Self> {
        T::from_json(value, path).map(Box::new)
    }

    fn to_json(&self) -> Value {
        (**self).to_json()
    }

    fn from_json_parts(
        value: Option<&Value>,
        extension: Option<&Value>,
        path: &JsonPath<'_>,
    ) -> DecodeResult<Option<Self>> {
        Ok(T::from_json_parts(value, extension, path)?.map(Box::new))
    }

    fn to_json_parts(&self) -> (Option<Value>, Option<Value>) {
        (**self).to_json_parts()
    }
}

/// Plain strings are used for element ids and `Extension.url`, which carry
/// no extensions of their own.
impl FhirJson for String {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> DecodeResult<Self> {
        match value {
            Value::String(text) => Ok(text.clone()),
            other => Err(invalid_type(path, "string", other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

/// Names the JSON shape of a value for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn invalid_type(path: &JsonPath<'_>, expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::new(
        path,
        DecodeErrorKind::InvalidType {
            expected,
            found: json_kind(found),
        },
    )
}

pub fn expect_object<'v>(
    value: &'v Value,
    path: &JsonPath<'_>,
) -> DecodeResult<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| invalid_type(path, "object", value))
}

fn expect_array<'v>(value: &'v Value, path: &JsonPath<'_>) -> DecodeResult<&'v Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| invalid_type(path, "array", value))
}

/// A member counts as present unless it is missing or `null`.
fn present<'v>(object: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
    object.get(key).filter(|value| !value.is_null())
}

/// Checks `resourceType` against the type being decoded. An absent
/// `resourceType` is accepted; the caller already knows what it expects.
pub fn check_resource_type(
    object: &Map<String, Value>,
    expected: &'static str,
    path: &JsonPath<'_>,
) -> DecodeResult<()> {
    match present(object, "resourceType") {
        None => Ok(()),
        Some(Value::String(found)) if found == expected => Ok(()),
        Some(Value::String(found)) => Err(DecodeError::new(
            path,
            DecodeErrorKind::ResourceTypeMismatch {
                expected,
                found: found.clone(),
            },
        )),
        Some(other) => Err(invalid_type(&path.field("resourceType"), "string", other)),
    }
}

pub fn read_optional<T: FhirJson>(
    object: &Map<String, Value>,
    name: &str,
    twin: &str,
    path: &JsonPath<'_>,
) -> DecodeResult<Option<T>> {
    let value = present(object, name);
    let extension = present(object, twin);
    if value.is_none() && extension.is_none() {
        return Ok(None);
    }
    T::from_json_parts(value, extension, &path.field(name))
}

/// Reads a repeated member and its parallel `_name` array.
///
/// Positions where both arrays hold `null` (or nothing) are skipped, so the
/// result never contains empty entries.
pub fn read_list<T: FhirJson>(
    object: &Map<String, Value>,
    name: &str,
    twin: &str,
    path: &JsonPath<'_>,
) -> DecodeResult<Vec<T>> {
    let field_path = path.field(name);
    let values = present(object, name)
        .map(|value| expect_array(value, &field_path))
        .transpose()?;
    let extensions = present(object, twin)
        .map(|value| expect_array(value, &path.field(twin)))
        .transpose()?;

    let len = values
        .map_or(0, Vec::len)
        .max(extensions.map_or(0, Vec::len));
    let mut items = Vec::with_capacity(len);
    for index in 0..len {
        let value = values
            .and_then(|values| values.get(index))
            .filter(|value| !value.is_null());
        let extension = extensions
            .and_then(|extensions| extensions.get(index))
            .filter(|value| !value.is_null());
        if value.is_none() && extension.is_none() {
            continue;
        }
        if let Some(item) = T::from_json_parts(value, extension, &field_path.index(index))? {
            items.push(item);
        }
    }
    Ok(items)
}

pub fn write_optional<T: FhirJson>(
    object: &mut Map<String, Value>,
    name: &str,
    twin: &str,
    value: &Option<T>,
) {
    let Some(value) = value else {
        return;
    };
    let (main, extension) = value.to_json_parts();
    if let Some(main) = main {
        object.insert(name.to_owned(), main);
    }
    if let Some(extension) = extension {
        object.insert(twin.to_owned(), extension);
    }
}

/// Writes a repeated member. Empty entries are skipped. The `_name` array is
/// only written when some entry has an id or extensions, and both arrays are
/// padded with `null` to stay aligned.
pub fn write_list<T: FhirJson>(
    object: &mut Map<String, Value>,
    name: &str,
    twin: &str,
    items: &[T],
) {
    let parts: Vec<_> = items
        .iter()
        .map(FhirJson::to_json_parts)
        .filter(|(main, extension)| main.is_some() || extension.is_some())
        .collect();
    if parts.is_empty() {
        return;
    }
    if parts.iter().any(|(main, _)| main.is_some()) {
        let values = parts
            .iter()
            .map(|(main, _)| main.clone().unwrap_or(Value::Null))
            .collect();
        object.insert(name.to_owned(), Value::Array(values));
    }
    if parts.iter().any(|(_, extension)| extension.is_some()) {
        let extensions = parts
            .into_iter()
            .map(|(_, extension)| extension.unwrap_or(Value::Null))
            .collect();
        object.insert(twin.to_owned(), Value::Array(extensions));
    }
}

/// Returns `true` when `key` belongs to one of the listed members or
/// choice prefixes, counting `_name` twins as their base member.
pub fn is_known_key(key: &str, known: &[&str], choices: &[&str]) -> bool {
    let base = key.strip_prefix('_').unwrap_or(key);
    known.contains(&base)
        || choices
            .iter()
            .any(|prefix| crate::r4::dynamic_value::choice_type_of(base, prefix).is_some())
}

/// Copies every member not claimed by the type, keeping document order.
pub fn collect_other(
    object: &Map<String, Value>,
    known: &[&str],
    choices: &[&str],
) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| !is_known_key(key, known, choices))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

pub fn write_other(object: &mut Map<String, Value>, other: &Map<String, Value>) {
    for (key, value) in other {
        object.insert(key.clone(), value.clone());
    }
}

/// Logs members a type does not model. They are dropped from the result.
pub fn trace_unrecognized(
    object: &Map<String, Value>,
    known: &[&str],
    choices: &[&str],
    type_name: &'static str,
    path: &JsonPath<'_>,
) {
    for key in object.keys() {
        if !is_known_key(key, known, choices) {
            tracing::debug!(type_name, key = %key, path = %path, "ignoring unrecognized member");
        }
    }
}
