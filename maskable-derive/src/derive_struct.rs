//! Struct-specific `Maskable` derivation.
//!
//! Named and tuple fields are read through `self`; unit structs have no
//! fields to describe.

use quote::quote;
use syn::{DataStruct, Fields, Index, Result};

use crate::{
    DeriveOutput,
    transform::{DeriveContext, generate_field_transform},
    types::is_exported,
};

pub(crate) fn derive_struct(ctx: &mut DeriveContext<'_>, data: &DataStruct) -> Result<DeriveOutput> {
    match &data.fields {
        Fields::Named(fields) => derive_named_struct(ctx, fields),
        Fields::Unnamed(fields) => derive_unnamed_struct(ctx, fields),
        Fields::Unit => Ok(DeriveOutput {
            mask_body: quote! { ::core::result::Result::Ok(Self) },
            zeroed_body: quote! { Self },
        }),
    }
}

fn derive_named_struct(
    ctx: &mut DeriveContext<'_>,
    fields: &syn::FieldsNamed,
) -> Result<DeriveOutput> {
    let mut members = Vec::new();
    let mut masked = Vec::new();
    let mut zeroed = Vec::new();

    for field in &fields.named {
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = field_name(ident);
        let access = quote! { &self.#ident };
        let transform =
            generate_field_transform(ctx, field, &name, is_exported(&field.vis), &access)?;
        members.push(ident);
        masked.push(transform.masked);
        zeroed.push(transform.zeroed);
    }

    Ok(DeriveOutput {
        mask_body: quote! {
            #[allow(unused_variables)]
            let fields = masker.describe::<Self>();
            ::core::result::Result::Ok(Self {
                #(#members: #masked),*
            })
        },
        zeroed_body: quote! {
            Self {
                #(#members: #zeroed),*
            }
        },
    })
}

fn derive_unnamed_struct(
    ctx: &mut DeriveContext<'_>,
    fields: &syn::FieldsUnnamed,
) -> Result<DeriveOutput> {
    let mut masked = Vec::new();
    let mut zeroed = Vec::new();

    for (index, field) in fields.unnamed.iter().enumerate() {
        let member = Index::from(index);
        let access = quote! { &self.#member };
        let transform = generate_field_transform(
            ctx,
            field,
            &index.to_string(),
            is_exported(&field.vis),
            &access,
        )?;
        masked.push(transform.masked);
        zeroed.push(transform.zeroed);
    }

    Ok(DeriveOutput {
        mask_body: quote! {
            #[allow(unused_variables)]
            let fields = masker.describe::<Self>();
            ::core::result::Result::Ok(Self(#(#masked),*))
        },
        zeroed_body: quote! {
            Self(#(#zeroed),*)
        },
    })
}

/// Field name as registered at runtime, without a raw identifier prefix.
pub(crate) fn field_name(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_owned(),
        None => name,
    }
}
