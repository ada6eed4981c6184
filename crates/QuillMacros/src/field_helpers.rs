use heck::ToLowerCamelCase;
use syn::punctuated::Punctuated;
use syn::{token, Attribute, Expr, Lit, Meta};

/// Settings collected from the `#[fhir_serde(...)]` attributes on one field.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    /// `rename = "jsonName"`
    pub rename: Option<String>,
    /// `choice = "prefix"`, marking an `[x]` field.
    pub choice: Option<String>,
    /// `other`, marking the bag that keeps keys the type does not model.
    pub other: bool,
}

/// Settings collected from the `#[fhir_serde(...)]` attributes on a struct.
#[derive(Default)]
pub(crate) struct StructAttrs {
    /// `resource_type = "Patient"`
    pub resource_type: Option<String>,
}

fn string_value(expr: &Expr) -> syn::Result<String> {
    if let Expr::Lit(expr_lit) = expr
        && let Lit::Str(lit_str) = &expr_lit.lit
    {
        return Ok(lit_str.value());
    }
    Err(syn::Error::new_spanned(expr, "expected a string literal"))
}

fn fhir_serde_metas(attrs: &[Attribute]) -> syn::Result<Vec<Meta>> {
    let mut metas = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("fhir_serde") {
            let list = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)?;
            metas.extend(list);
        }
    }
    Ok(metas)
}

/// Parses the `fhir_serde` attributes of a field.
///
/// ```rust,ignore
/// #[fhir_serde(rename = "type")]
/// pub type_: Option<CodeableConcept>,
///
/// #[fhir_serde(choice = "value")]
/// pub value: Option<DynamicValue>,
/// ```
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();
    for meta in fhir_serde_metas(&field.attrs)? {
        match &meta {
            Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                parsed.rename = Some(string_value(&nv.value)?);
            }
            Meta::NameValue(nv) if nv.path.is_ident("choice") => {
                parsed.choice = Some(string_value(&nv.value)?);
            }
            Meta::Path(path) if path.is_ident("other") => parsed.other = true,
            _ => {
                return Err(syn::Error::new_spanned(
                    meta,
                    "unsupported fhir_serde field attribute",
                ));
            }
        }
    }
    Ok(parsed)
}

/// Parses the `fhir_serde` attributes of the struct itself.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut parsed = StructAttrs::default();
    for meta in fhir_serde_metas(attrs)? {
        match &meta {
            Meta::NameValue(nv) if nv.path.is_ident("resource_type") => {
                parsed.resource_type = Some(string_value(&nv.value)?);
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    meta,
                    "unsupported fhir_serde struct attribute",
                ));
            }
        }
    }
    Ok(parsed)
}

/// Determines the JSON member name for a field.
///
/// An explicit `rename` wins; otherwise the Rust name is converted from
/// `snake_case` to `camelCase`.
///
/// ```rust,ignore
/// // pub implicit_rules: Option<Uri>            -> "implicitRules"
/// // #[fhir_serde(rename = "abstract")]
/// // pub is_abstract: Option<Boolean>           -> "abstract"
/// ```
pub(crate) fn get_effective_field_name(ident: &syn::Ident, attrs: &FieldAttrs) -> String {
    if let Some(rename) = &attrs.rename {
        return rename.clone();
    }
    let name = ident.to_string();
    name.strip_prefix("r#")
        .unwrap_or(&name)
        .to_lower_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_default_name_is_lower_camel_case() {
        let field: syn::Field = parse_quote!(pub implicit_rules: Option<Uri>);
        let attrs = parse_field_attrs(&field).unwrap();
        let name = get_effective_field_name(field.ident.as_ref().unwrap(), &attrs);
        assert_eq!(name, "implicitRules");
    }

    #[test]
    fn test_rename_and_choice_attributes() {
        let field: syn::Field = parse_quote! {
            #[fhir_serde(rename = "type")]
            pub type_: Option<Code>
        };
        let attrs = parse_field_attrs(&field).unwrap();
        assert_eq!(get_effective_field_name(field.ident.as_ref().unwrap(), &attrs), "type");

        let field: syn::Field = parse_quote! {
            #[fhir_serde(choice = "deceased")]
            pub deceased: Option<DynamicValue>
        };
        let attrs = parse_field_attrs(&field).unwrap();
        assert_eq!(attrs.choice.as_deref(), Some("deceased"));
        assert!(!attrs.other);
    }

    #[test]
    fn test_unknown_attribute_is_rejected() {
        let field: syn::Field = parse_quote! {
            #[fhir_serde(flatten)]
            pub value: Option<DynamicValue>
        };
        assert!(parse_field_attrs(&field).is_err());
    }

    #[test]
    fn test_struct_resource_type() {
        let input: syn::DeriveInput = parse_quote! {
            #[fhir_serde(resource_type = "Patient")]
            pub struct Patient {}
        };
        let attrs = parse_struct_attrs(&input.attrs).unwrap();
        assert_eq!(attrs.resource_type.as_deref(), Some("Patient"));
    }
}
