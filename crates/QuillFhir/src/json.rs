//! Document-level reading and writing.
//!
//! These wrap `serde_json` parsing and printing around the [`FhirJson`] tree
//! codec. Decoding starts at the document root, so errors inside a resource
//! read like `Patient.name[0].given`.

use std::io::{Read, Write};

use serde_json::Value;

use crate::codec::{FhirJson, JsonPath};
use crate::error::{Error, Result};

pub fn from_json_str<T: FhirJson>(text: &str) -> Result<T> {
    let value: Value = serde_json::from_str(text)?;
    from_json_value(&value)
}

pub fn from_json_slice<T: FhirJson>(bytes: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_json_value(&value)
}

pub fn from_json_value<T: FhirJson>(value: &Value) -> Result<T> {
    Ok(T::from_json(value, &JsonPath::root())?)
}

pub fn from_reader<T: FhirJson, R: Read>(reader: R) -> Result<T> {
    let value: Value = serde_json::from_reader(reader).map_err(stream_error)?;
    from_json_value(&value)
}

/// Failures of the underlying stream become [`Error::Io`].
fn stream_error(error: serde_json::Error) -> Error {
    if error.is_io() {
        Error::Io(error.into())
    } else {
        Error::Json(error)
    }
}

pub fn to_json_value<T: FhirJson>(value: &T) -> Value {
    value.to_json()
}

pub fn to_json_string<T: FhirJson>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(&value.to_json())?)
}

pub fn to_json_string_pretty<T: FhirJson>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&value.to_json())?)
}

pub fn to_writer<T: FhirJson, W: Write>(writer: W, value: &T) -> Result<()> {
    serde_json::to_writer(writer, &value.to_json()).map_err(stream_error)?;
    Ok(())
}

/// Writes two-space indented JSON.
pub fn to_writer_pretty<T: FhirJson, W: Write>(writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(writer, &value.to_json()).map_err(stream_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;
    use crate::r4::{Patient, Resource};
    use std::io;

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_string_round_trip() {
        let text = r#"{"resourceType":"Patient","id":"p1","gender":"female"}"#;
        let patient: Patient = from_json_str(text).unwrap();
        assert_eq!(to_json_string(&patient).unwrap(), text);
    }

    #[test]
    fn test_reader_and_writer() {
        let text = br#"{"resourceType":"Banana","peel":"yellow"}"#;
        let resource: Resource = from_reader(&text[..]).unwrap();
        let mut out = Vec::new();
        to_writer(&mut out, &resource).unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn test_pretty_output() {
        let patient: Patient = from_json_slice(br#"{"resourceType":"Patient","id":"p1"}"#).unwrap();
        assert_eq!(
            to_json_string_pretty(&patient).unwrap(),
            "{\n  \"resourceType\": \"Patient\",\n  \"id\": \"p1\"\n}"
        );
    }

    #[test]
    fn test_syntax_error_is_json_error() {
        let result: Result<Resource> = from_json_str("{not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_stream_failures_are_io_errors() {
        let result: Result<Resource> = from_reader(Broken);
        let Err(Error::Io(error)) = result else {
            panic!("expected an I/O error");
        };
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);

        let patient = Patient::default();
        assert!(matches!(to_writer(Broken, &patient), Err(Error::Io(_))));
        assert!(matches!(to_writer_pretty(Broken, &patient), Err(Error::Io(_))));
    }

    #[test]
    fn test_truncated_reader_is_json_error() {
        let result: Result<Resource> = from_reader(&br#"{"resourceType":"#[..]);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_model_error_is_decode_error() {
        let result: Result<Resource> = from_json_str(r#"{"id":"x"}"#);
        let Err(Error::Decode(error)) = result else {
            panic!("expected a decode error");
        };
        assert_eq!(error.kind(), &DecodeErrorKind::MissingResourceType);
    }
}
