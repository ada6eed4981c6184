//=============================================================================
// FhirSerde Implementation Generator Functions
//=============================================================================

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident};

use crate::field_helpers::{get_effective_field_name, parse_field_attrs, parse_struct_attrs};
use crate::type_helpers::{get_option_inner_type, get_vec_inner_type, is_named_type};

/// How one struct field maps onto the JSON object.
enum FieldKind {
    /// `Option<T>`: one member plus its `_name` twin.
    Optional { name: String },
    /// `Vec<T>`: one array member plus its parallel `_name` array.
    List { name: String },
    /// `Option<DynamicValue>` marked `choice`: a `prefix + TypeSuffix` member.
    Choice { prefix: String },
    /// The bag of members the type does not model.
    Other,
}

struct FieldPlan<'a> {
    ident: &'a Ident,
    kind: FieldKind,
}

fn plan_field(field: &syn::Field) -> syn::Result<FieldPlan<'_>> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "FhirSerde requires named fields"));
    };
    let attrs = parse_field_attrs(field)?;

    if attrs.other {
        return Ok(FieldPlan {
            ident,
            kind: FieldKind::Other,
        });
    }

    if let Some(prefix) = attrs.choice {
        let is_dynamic = get_option_inner_type(&field.ty)
            .is_some_and(|inner| is_named_type(inner, "DynamicValue"));
        if !is_dynamic {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "choice fields must be Option<DynamicValue>",
            ));
        }
        return Ok(FieldPlan {
            ident,
            kind: FieldKind::Choice { prefix },
        });
    }

    let name = get_effective_field_name(ident, &attrs);
    let kind = if get_option_inner_type(&field.ty).is_some() {
        FieldKind::Optional { name }
    } else if get_vec_inner_type(&field.ty).is_some() {
        FieldKind::List { name }
    } else {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "FhirSerde fields must be Option<T>, Vec<T>, or marked #[fhir_serde(other)]",
        ));
    };
    Ok(FieldPlan { ident, kind })
}

/// Generates `FhirJson`, `serde::Serialize` and `serde::Deserialize` for a
/// FHIR struct.
///
/// Every field is read and written through the tree helpers in
/// `crate::codec`, so the generated code only has to name each member:
///
/// ```rust,ignore
/// #[derive(FhirSerde)]
/// #[fhir_serde(resource_type = "Patient")]
/// pub struct Patient {
///     pub id: Option<Id>,                    // "id" / "_id"
///     pub name: Vec<HumanName>,              // "name" array
///     #[fhir_serde(choice = "deceased")]
///     pub deceased: Option<DynamicValue>,    // "deceasedBoolean", "deceasedDateTime", ...
/// }
/// ```
///
/// Structs with a `resource_type` also get `NamedResource`, write
/// `resourceType` first, and reject documents naming a different type.
pub(crate) fn generate_fhir_serde(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let type_name = name.to_string();
    let struct_attrs = parse_struct_attrs(&input.attrs)?;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "FhirSerde can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            name,
            "FhirSerde requires a struct with named fields",
        ));
    };

    let plans = fields
        .named
        .iter()
        .map(plan_field)
        .collect::<syn::Result<Vec<_>>>()?;

    let mut known_names = Vec::new();
    let mut choice_prefixes = Vec::new();
    if struct_attrs.resource_type.is_some() {
        known_names.push("resourceType".to_string());
    }
    for plan in &plans {
        match &plan.kind {
            FieldKind::Optional { name } | FieldKind::List { name } => {
                known_names.push(name.clone())
            }
            FieldKind::Choice { prefix } => choice_prefixes.push(prefix.clone()),
            FieldKind::Other => {}
        }
    }
    let has_other = plans.iter().any(|plan| matches!(plan.kind, FieldKind::Other));

    let decoders = plans.iter().map(|plan| {
        let ident = plan.ident;
        match &plan.kind {
            FieldKind::Optional { name } => {
                let twin = format!("_{name}");
                quote! { #ident: crate::codec::read_optional(object, #name, #twin, path)?, }
            }
            FieldKind::List { name } => {
                let twin = format!("_{name}");
                quote! { #ident: crate::codec::read_list(object, #name, #twin, path)?, }
            }
            FieldKind::Choice { prefix } => {
                quote! { #ident: crate::codec::read_choice(object, #prefix, path)?, }
            }
            FieldKind::Other => {
                quote! { #ident: crate::codec::collect_other(object, KNOWN, CHOICES), }
            }
        }
    });

    let encoders = plans.iter().map(|plan| {
        let ident = plan.ident;
        match &plan.kind {
            FieldKind::Optional { name } => {
                let twin = format!("_{name}");
                quote! { crate::codec::write_optional(&mut object, #name, #twin, &self.#ident); }
            }
            FieldKind::List { name } => {
                let twin = format!("_{name}");
                quote! { crate::codec::write_list(&mut object, #name, #twin, &self.#ident); }
            }
            FieldKind::Choice { prefix } => {
                quote! { crate::codec::write_choice(&mut object, #prefix, &self.#ident); }
            }
            FieldKind::Other => {
                quote! { crate::codec::write_other(&mut object, &self.#ident); }
            }
        }
    });

    let emptiness_checks = plans.iter().map(|plan| {
        let ident = plan.ident;
        match &plan.kind {
            FieldKind::Optional { .. } | FieldKind::Choice { .. } => {
                quote! { self.#ident.is_none() }
            }
            FieldKind::List { .. } | FieldKind::Other => quote! { self.#ident.is_empty() },
        }
    });

    let unrecognized = if has_other {
        quote! {}
    } else {
        quote! { crate::codec::trace_unrecognized(object, KNOWN, CHOICES, #type_name, path); }
    };

    // Resources always carry `resourceType`; other structs vanish when empty.
    let sparse_parts = if struct_attrs.resource_type.is_some() {
        quote! {}
    } else {
        quote! {
            fn from_json_parts(
                value: ::std::option::Option<&::serde_json::Value>,
                _extension: ::std::option::Option<&::serde_json::Value>,
                path: &crate::codec::JsonPath<'_>,
            ) -> crate::codec::DecodeResult<::std::option::Option<Self>> {
                let ::std::option::Option::Some(value) = value else {
                    return ::std::result::Result::Ok(::std::option::Option::None);
                };
                let decoded = <Self as crate::codec::FhirJson>::from_json(value, path)?;
                ::std::result::Result::Ok((!decoded.is_empty()).then_some(decoded))
            }

            fn to_json_parts(
                &self,
            ) -> (
                ::std::option::Option<::serde_json::Value>,
                ::std::option::Option<::serde_json::Value>,
            ) {
                if self.is_empty() {
                    return (::std::option::Option::None, ::std::option::Option::None);
                }
                (
                    ::std::option::Option::Some(crate::codec::FhirJson::to_json(self)),
                    ::std::option::Option::None,
                )
            }
        }
    };

    let (resource_check, resource_write, named_resource) = match &struct_attrs.resource_type {
        Some(resource_type) => (
            quote! { crate::codec::check_resource_type(object, #resource_type, path)?; },
            quote! {
                object.insert(
                    "resourceType".to_owned(),
                    ::serde_json::Value::String(#resource_type.to_owned()),
                );
            },
            quote! {
                impl crate::codec::NamedResource for #name {
                    const RESOURCE_TYPE: &'static str = #resource_type;
                }
            },
        ),
        None => (quote! {}, quote! {}, quote! {}),
    };

    Ok(quote! {
        impl #name {
            /// Returns `true` when no member would be written.
            #[doc(hidden)]
            pub fn is_empty(&self) -> bool {
                true #(&& #emptiness_checks)*
            }
        }

        impl crate::codec::FhirJson for #name {
            fn from_json(
                value: &::serde_json::Value,
                path: &crate::codec::JsonPath<'_>,
            ) -> crate::codec::DecodeResult<Self> {
                const KNOWN: &[&str] = &[#(#known_names),*];
                const CHOICES: &[&str] = &[#(#choice_prefixes),*];
                let object = crate::codec::expect_object(value, path)?;
                #resource_check
                #unrecognized
                Ok(Self {
                    #(#decoders)*
                })
            }

            fn to_json(&self) -> ::serde_json::Value {
                let mut object = ::serde_json::Map::new();
                #resource_write
                #(#encoders)*
                ::serde_json::Value::Object(object)
            }

            #sparse_parts
        }

        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(
                    &crate::codec::FhirJson::to_json(self),
                    serializer,
                )
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as crate::codec::FhirJson>::from_json(&value, &crate::codec::JsonPath::root())
                    .map_err(::serde::de::Error::custom)
            }
        }

        #named_resource
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn render(input: DeriveInput) -> String {
        generate_fhir_serde(&input).unwrap().to_string()
    }

    #[test]
    fn test_optional_and_list_fields() {
        let output = render(parse_quote! {
            pub struct HumanName {
                pub id: Option<String>,
                pub given: Vec<FhirString>,
            }
        });
        assert!(output.contains("read_optional (object , \"id\" , \"_id\" , path)"));
        assert!(output.contains("read_list (object , \"given\" , \"_given\" , path)"));
        assert!(output.contains("trace_unrecognized"));
        assert!(!output.contains("NamedResource"));
    }

    #[test]
    fn test_resource_type_and_choice() {
        let output = render(parse_quote! {
            #[fhir_serde(resource_type = "Observation")]
            pub struct Observation {
                pub id: Option<Id>,
                #[fhir_serde(choice = "value")]
                pub value: Option<DynamicValue>,
            }
        });
        assert!(output.contains("check_resource_type (object , \"Observation\" , path)"));
        assert!(output.contains("read_choice (object , \"value\" , path)"));
        assert!(output.contains("NamedResource for Observation"));
        assert!(output.contains("\"resourceType\" , \"id\""));
    }

    #[test]
    fn test_is_empty_covers_every_field() {
        let output = render(parse_quote! {
            pub struct Dosage {
                pub text: Option<FhirString>,
                pub timing: Vec<Timing>,
                #[fhir_serde(choice = "asNeeded")]
                pub as_needed: Option<DynamicValue>,
            }
        });
        assert!(output.contains(
            "true && self . text . is_none () && self . timing . is_empty () && self . as_needed . is_none ()"
        ));
        assert!(output.contains("fn to_json_parts"));
        assert!(output.contains("fn from_json_parts"));
    }

    #[test]
    fn test_resources_keep_default_parts() {
        let output = render(parse_quote! {
            #[fhir_serde(resource_type = "Basic")]
            pub struct Basic {
                pub id: Option<Id>,
            }
        });
        assert!(output.contains("fn is_empty"));
        assert!(!output.contains("fn to_json_parts"));
    }

    #[test]
    fn test_other_bag_skips_unrecognized_trace() {
        let output = render(parse_quote! {
            pub struct Extension {
                pub url: Option<String>,
                #[fhir_serde(other)]
                pub other: serde_json::Map<String, serde_json::Value>,
            }
        });
        assert!(output.contains("collect_other (object , KNOWN , CHOICES)"));
        assert!(!output.contains("trace_unrecognized"));
    }

    #[test]
    fn test_rejects_bare_field_type() {
        let input: DeriveInput = parse_quote! {
            pub struct Broken {
                pub id: String,
            }
        };
        assert!(generate_fhir_serde(&input).is_err());
    }

    #[test]
    fn test_rejects_enum() {
        let input: DeriveInput = parse_quote! {
            pub enum Broken { A, B }
        };
        assert!(generate_fhir_serde(&input).is_err());
    }
}
