//! Type utilities for the derive macro.

/// Checks if a type is `PhantomData<...>` or `std::marker::PhantomData<...>`.
///
/// `PhantomData<T>` never carries data, so its generic parameter needs no
/// masking bounds.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    if let syn::Type::Path(path) = ty
        && let Some(last_segment) = path.path.segments.last()
    {
        return last_segment.ident == "PhantomData"
            && matches!(
                last_segment.arguments,
                syn::PathArguments::AngleBracketed(_)
            );
    }
    false
}

/// Whether a field counts as exported: any `pub` form does.
pub(crate) fn is_exported(vis: &syn::Visibility) -> bool {
    !matches!(vis, syn::Visibility::Inherited)
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn parse_type(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    fn parse_vis(tokens: proc_macro2::TokenStream) -> syn::Visibility {
        syn::parse2(tokens).expect("should parse as Visibility")
    }

    #[test]
    fn phantom_data_bare_detected() {
        assert!(is_phantom_data(&parse_type(quote! { PhantomData<T> })));
    }

    #[test]
    fn phantom_data_std_marker_detected() {
        assert!(is_phantom_data(&parse_type(quote! { std::marker::PhantomData<T> })));
    }

    #[test]
    fn phantom_data_absolute_path_detected() {
        assert!(is_phantom_data(&parse_type(quote! { ::core::marker::PhantomData<T> })));
    }

    #[test]
    fn not_phantom_data_option() {
        assert!(!is_phantom_data(&parse_type(quote! { Option<T> })));
    }

    #[test]
    fn not_phantom_data_without_generics() {
        assert!(!is_phantom_data(&parse_type(quote! { PhantomData })));
    }

    #[test]
    fn visibility_export_rules() {
        assert!(is_exported(&parse_vis(quote! { pub })));
        assert!(is_exported(&parse_vis(quote! { pub(crate) })));
        assert!(is_exported(&parse_vis(quote! { pub(super) })));
        assert!(!is_exported(&parse_vis(quote! {})));
    }
}
