//=============================================================================
// Type Analysis Helper Functions
//=============================================================================

use syn::{GenericArgument, Path, PathArguments, Type, TypePath};

/// Extracts `T` from a single-argument generic wrapper named `wrapper`.
///
/// Only the last path segment is inspected, so `Option<T>`,
/// `std::option::Option<T>` and `core::option::Option<T>` all match.
fn get_wrapped_type<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(TypePath {
        path: Path { segments, .. },
        ..
    }) = ty
        && let Some(segment) = segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner_ty)) = args.args.first()
    {
        return Some(inner_ty);
    }
    None
}

/// Extracts the inner type from an `Option<T>` type.
///
/// ```rust,ignore
/// // Option<Reference>       -> Some(Reference)
/// // Option<Box<Reference>>  -> Some(Box<Reference>)
/// // Reference               -> None
/// ```
pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapped_type(ty, "Option")
}

/// Extracts the inner type from a `Vec<T>` type.
///
/// ```rust,ignore
/// // Vec<HumanName> -> Some(HumanName)
/// // HumanName      -> None
/// ```
pub(crate) fn get_vec_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapped_type(ty, "Vec")
}

/// Returns `true` when the type's last path segment is `name`.
pub(crate) fn is_named_type(ty: &Type, name: &str) -> bool {
    matches!(ty, Type::Path(TypePath { path, .. })
        if path.segments.last().is_some_and(|segment| segment.ident == name))
}
