//! Shared field transformation logic for struct and enum derivation.
//!
//! Each field contributes one entry to the type's `FieldInfo` table and two
//! expressions: one for the masked copy and one for the zero value.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{Ident, Result, spanned::Spanned};

use crate::{
    attrs::{FieldOptions, parse_field_options},
    generics::collect_generics_from_type,
    types::is_phantom_data,
};

/// Accumulated state while walking the fields of one type.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) crate_root: &'a TokenStream,
    pub(crate) field_infos: Vec<TokenStream>,
    pub(crate) walked_generics: Vec<Ident>,
    pub(crate) opaque_generics: Vec<Ident>,
}

impl<'a> DeriveContext<'a> {
    pub(crate) fn new(generics: &'a syn::Generics, crate_root: &'a TokenStream) -> Self {
        Self {
            generics,
            crate_root,
            field_infos: Vec::new(),
            walked_generics: Vec::new(),
            opaque_generics: Vec::new(),
        }
    }
}

/// Expressions generated for one field.
pub(crate) struct FieldTransform {
    pub(crate) masked: TokenStream,
    pub(crate) zeroed: TokenStream,
}

/// Generates the expressions for a single field.
///
/// `access` must evaluate to a reference to the field value.
///
/// | Field                 | Masked copy                  | Zero value           |
/// |-----------------------|------------------------------|----------------------|
/// | `PhantomData<_>`      | clone                        | clone                |
/// | `#[mask(opaque)]`     | `Masker::copy_field`         | `Default::default()` |
/// | anything else         | `Masker::mask_field`         | `Maskable::zeroed`   |
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    field: &syn::Field,
    name: &str,
    exported: bool,
    access: &TokenStream,
) -> Result<FieldTransform> {
    let crate_root = ctx.crate_root;
    let span = field.ty.span();
    let FieldOptions {
        annotations,
        opaque,
    } = parse_field_options(&field.attrs)?;

    let index = ctx.field_infos.len();
    let keywords = annotations.iter().map(|a| a.keyword.as_str());
    let rules = annotations.iter().map(|a| &a.rule);
    ctx.field_infos.push(quote! {
        #crate_root::FieldInfo::new(
            #name,
            #exported,
            &[#(#crate_root::Annotation::new(#keywords, #rules)),*],
        )
    });

    let ty = &field.ty;
    if is_phantom_data(ty) {
        let copy = quote_spanned! { span => ::core::clone::Clone::clone(#access) };
        return Ok(FieldTransform {
            masked: copy.clone(),
            zeroed: copy,
        });
    }

    if opaque {
        collect_generics_from_type(ty, ctx.generics, &mut ctx.opaque_generics);
        return Ok(FieldTransform {
            masked: quote_spanned! { span =>
                masker.copy_field(&fields[#index], #access)
            },
            zeroed: quote_spanned! { span => ::core::default::Default::default() },
        });
    }

    collect_generics_from_type(ty, ctx.generics, &mut ctx.walked_generics);
    Ok(FieldTransform {
        masked: quote_spanned! { span =>
            masker.mask_field(&fields[#index], #access)?
        },
        zeroed: quote_spanned! { span => #crate_root::Maskable::zeroed(#access) },
    })
}
