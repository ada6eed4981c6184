//! Error types for reading and writing FHIR JSON.

use thiserror::Error;

use crate::codec::JsonPath;

/// What went wrong while mapping a JSON tree onto the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    /// A member had the wrong JSON shape, e.g. an object where a string belongs.
    #[error("expected {expected}, found {found}")]
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },
    /// A member had the right shape but an unusable lexical value.
    #[error("invalid {expected} value {value:?}")]
    InvalidValue { expected: &'static str, value: String },
    /// A resource position held an object with no `resourceType`.
    #[error("missing resourceType")]
    MissingResourceType,
    /// A typed decode was asked for one resource and found another.
    #[error("expected resourceType {expected:?}, found {found:?}")]
    ResourceTypeMismatch { expected: &'static str, found: String },
}

/// A decode failure together with the location it happened at, e.g.
/// `Observation.component[1].valueQuantity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {path}")]
pub struct DecodeError {
    path: String,
    kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(path: &JsonPath<'_>, kind: DecodeErrorKind) -> Self {
        Self {
            path: path.to_string(),
            kind,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
}

/// Errors returned by the document-level read and write functions.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not well-formed JSON, or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON was well-formed but did not fit the FHIR model.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Reading from or writing to the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display_includes_path() {
        let root = JsonPath::Root("Observation");
        let component = root.field("component");
        let second = component.index(1);
        let error = DecodeError::new(
            &second.field("valueQuantity"),
            DecodeErrorKind::InvalidType {
                expected: "object",
                found: "string",
            },
        );
        assert_eq!(error.path(), "Observation.component[1].valueQuantity");
        assert_eq!(
            error.to_string(),
            "expected object, found string at Observation.component[1].valueQuantity"
        );
    }

    #[test]
    fn test_error_from_decode_error() {
        let error: Error = DecodeError::new(
            &JsonPath::root(),
            DecodeErrorKind::MissingResourceType,
        )
        .into();
        assert!(matches!(error, Error::Decode(_)));
        assert_eq!(error.to_string(), "missing resourceType at $");
    }
}
