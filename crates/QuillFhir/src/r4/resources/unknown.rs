use serde_json::{Map, Value};

use crate::codec::{
    expect_object, invalid_type, read_optional, write_optional, DecodeResult, FhirJson, JsonPath,
};
use crate::error::{DecodeError, DecodeErrorKind};
use crate::r4::{Code, Id, Meta, Uri};

/// Members typed by [`UnknownResource`], including the primitive twins.
const STANDARD_KEYS: &[&str] = &[
    "resourceType",
    "id",
    "_id",
    "meta",
    "implicitRules",
    "_implicitRules",
    "language",
    "_language",
];

/// A resource whose `resourceType` has no modeled struct.
///
/// The common resource header is decoded; every other member is kept as raw
/// JSON in `other_data`, in document order, so the resource can be written
/// back unchanged. Header members that are explicitly `null` are kept there
/// too.
///
/// ```rust
/// use quill_fhir::json::{from_json_str, to_json_value};
/// use quill_fhir::r4::Resource;
/// use serde_json::json;
///
/// let resource: Resource =
///     from_json_str(r#"{"resourceType":"Banana","id":"b1","ripeness":{"level":3}}"#).unwrap();
/// assert!(resource.is_unknown());
/// assert_eq!(resource.resource_type(), "Banana");
/// assert_eq!(
///     to_json_value(&resource),
///     json!({"resourceType": "Banana", "id": "b1", "ripeness": {"level": 3}})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnknownResource {
    pub resource_type: String,
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub other_data: Map<String, Value>,
}

impl UnknownResource {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            ..Default::default()
        }
    }
}

impl FhirJson for UnknownResource {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> DecodeResult<Self> {
        let object = expect_object(value, path)?;
        let resource_type = match object.get("resourceType") {
            Some(Value::String(resource_type)) => resource_type.clone(),
            None | Some(Value::Null) => {
                return Err(DecodeError::new(path, DecodeErrorKind::MissingResourceType));
            }
            Some(other) => return Err(invalid_type(&path.field("resourceType"), "string", other)),
        };
        let other_data = object
            .iter()
            .filter(|(key, value)| value.is_null() || !STANDARD_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(Self {
            resource_type,
            id: read_optional(object, "id", "_id", path)?,
            meta: read_optional(object, "meta", "_meta", path)?,
            implicit_rules: read_optional(object, "implicitRules", "_implicitRules", path)?,
            language: read_optional(object, "language", "_language", path)?,
            other_data,
        })
    }

    fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            "resourceType".to_owned(),
            Value::String(self.resource_type.clone()),
        );
        write_optional(&mut object, "id", "_id", &self.id);
        write_optional(&mut object, "meta", "_meta", &self.meta);
        write_optional(&mut object, "implicitRules", "_implicitRules", &self.implicit_rules);
        write_optional(&mut object, "language", "_language", &self.language);
        for (key, value) in &self.other_data {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_is_typed_and_rest_is_kept() {
        let source = json!({
            "resourceType": "Banana",
            "zeta": [1, {"deep": null}],
            "id": "b1",
            "_id": {"id": "id-el"},
            "language": "en",
            "alpha": "first"
        });
        let banana = UnknownResource::from_json(&source, &JsonPath::root()).unwrap();
        assert_eq!(banana.resource_type, "Banana");
        assert_eq!(banana.id.as_ref().and_then(|id| id.id.as_deref()), Some("id-el"));
        assert_eq!(
            banana.language.as_ref().and_then(|l| l.value.as_deref()),
            Some("en")
        );
        let keys: Vec<_> = banana.other_data.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_write_puts_header_first() {
        let source = json!({
            "resourceType": "Banana",
            "zeta": 1,
            "id": "b1",
            "alpha": {"x": [true]}
        });
        let banana = UnknownResource::from_json(&source, &JsonPath::root()).unwrap();
        let written = banana.to_json();
        assert_eq!(written, source);
        let keys: Vec<_> = written.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["resourceType", "id", "zeta", "alpha"]);
    }

    #[test]
    fn test_null_header_member_is_kept() {
        let source = json!({"resourceType": "Banana", "language": null, "peel": 1});
        let banana = UnknownResource::from_json(&source, &JsonPath::root()).unwrap();
        assert!(banana.language.is_none());
        assert_eq!(banana.other_data.get("language"), Some(&Value::Null));
        assert_eq!(banana.to_json(), source);
    }

    #[test]
    fn test_meta_keeps_unmodeled_members() {
        let source = json!({
            "resourceType": "Banana",
            "meta": {"versionId": "1", "vendorTag": "x"},
            "peel": 1
        });
        let banana = UnknownResource::from_json(&source, &JsonPath::root()).unwrap();
        let meta = banana.meta.as_ref().unwrap();
        assert_eq!(meta.version_id.as_ref().and_then(|v| v.value.as_deref()), Some("1"));
        assert_eq!(meta.other.get("vendorTag"), Some(&json!("x")));
        assert_eq!(banana.to_json(), source);
    }

    #[test]
    fn test_requires_resource_type() {
        let error = UnknownResource::from_json(&json!({"id": "x"}), &JsonPath::root())
            .unwrap_err();
        assert_eq!(error.kind(), &DecodeErrorKind::MissingResourceType);

        let error = UnknownResource::from_json(&json!({"resourceType": 7}), &JsonPath::root())
            .unwrap_err();
        assert_eq!(error.path(), "$.resourceType");
    }

    #[test]
    fn test_new_encodes_type_only() {
        assert_eq!(
            UnknownResource::new("Banana").to_json(),
            json!({"resourceType": "Banana"})
        );
    }
}
