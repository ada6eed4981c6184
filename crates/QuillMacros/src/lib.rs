//! # Quill Macros - Procedural Macros for the Quill FHIR Model
//!
//! This crate provides the `#[derive(FhirSerde)]` macro that generates the JSON
//! codec for every complex type and resource in `quill-fhir`.
//!
//! ## FHIR Serialization Challenges
//!
//! FHIR JSON has several patterns that a plain serde derive cannot express:
//!
//! ### Extension Pattern
//!
//! Primitives can carry an id and extensions in a parallel `_fieldName` member:
//!
//! ```json
//! {
//!   "status": "active",
//!   "_status": {
//!     "id": "status-1",
//!     "extension": [...]
//!   }
//! }
//! ```
//!
//! ### Array Serialization
//!
//! Arrays of primitives are split into value and extension arrays padded with `null`:
//!
//! ```json
//! {
//!   "given": ["John", null],
//!   "_given": [null, {"id": "name-2"}]
//! }
//! ```
//!
//! ### Choice Types
//!
//! `[x]` fields are written as one member whose name carries the type suffix:
//!
//! ```json
//! { "valueQuantity": {...} }
//! { "valueString": "text" }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use quill_macros::FhirSerde;
//!
//! #[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
//! #[fhir_serde(resource_type = "Patient")]
//! pub struct Patient {
//!     pub id: Option<Id>,
//!     pub extension: Vec<Extension>,
//!     pub active: Option<Boolean>,
//!     #[fhir_serde(choice = "deceased")]
//!     pub deceased: Option<DynamicValue>,
//! }
//! ```
//!
//! The generated code refers to `crate::codec`, so the derive is meant to be
//! used inside `quill-fhir` itself.

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

use crate::fhir_serde_impl::generate_fhir_serde;

pub(crate) mod field_helpers;
pub(crate) mod fhir_serde_impl;
pub(crate) mod type_helpers;

/// Derives the FHIR JSON codec for a struct.
///
/// # Supported Attributes
///
/// - `#[fhir_serde(resource_type = "Name")]` on the struct: writes and checks `resourceType`
/// - `#[fhir_serde(rename = "name")]`: overrides the camelCase member name
/// - `#[fhir_serde(choice = "prefix")]`: an `[x]` field of type `Option<DynamicValue>`
/// - `#[fhir_serde(other)]`: a `serde_json::Map` keeping members the struct does not model
///
/// # Generated Implementations
///
/// - `crate::codec::FhirJson`
/// - `serde::Serialize` and `serde::Deserialize`, both going through the JSON tree
/// - `crate::codec::NamedResource` when `resource_type` is given
///
/// All other fields must be `Option<T>` or `Vec<T>` where `T: FhirJson`.
#[proc_macro_derive(FhirSerde, attributes(fhir_serde))]
pub fn fhir_serde_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match generate_fhir_serde(&input) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}
