//! Enum-specific `Maskable` derivation.
//!
//! Each variant is matched and rebuilt. Variant fields share the visibility
//! of the enum, so they always count as exported. Field indices run across
//! all variants in declaration order.

use quote::{format_ident, quote};
use syn::{DataEnum, Fields, Result};

use crate::{
    DeriveOutput,
    derive_struct::field_name,
    transform::{DeriveContext, generate_field_transform},
};

pub(crate) fn derive_enum(ctx: &mut DeriveContext<'_>, data: &DataEnum) -> Result<DeriveOutput> {
    if data.variants.is_empty() {
        return Ok(DeriveOutput {
            mask_body: quote! { match *self {} },
            zeroed_body: quote! { match *self {} },
        });
    }

    let mut mask_arms = Vec::new();
    let mut zeroed_arms = Vec::new();

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        match &variant.fields {
            Fields::Named(fields) => {
                let mut members = Vec::new();
                let mut bindings = Vec::new();
                let mut masked = Vec::new();
                let mut zeroed = Vec::new();
                for (index, field) in fields.named.iter().enumerate() {
                    let Some(ident) = &field.ident else {
                        continue;
                    };
                    let binding = format_ident!("field_{index}");
                    let transform = generate_field_transform(
                        ctx,
                        field,
                        &field_name(ident),
                        true,
                        &quote! { #binding },
                    )?;
                    members.push(ident);
                    bindings.push(binding);
                    masked.push(transform.masked);
                    zeroed.push(transform.zeroed);
                }
                let pattern = quote! { Self::#variant_ident { #(#members: #bindings),* } };
                mask_arms.push(quote! {
                    #pattern => ::core::result::Result::Ok(Self::#variant_ident {
                        #(#members: #masked),*
                    }),
                });
                zeroed_arms.push(quote! {
                    #pattern => Self::#variant_ident { #(#members: #zeroed),* },
                });
            }
            Fields::Unnamed(fields) => {
                let mut bindings = Vec::new();
                let mut masked = Vec::new();
                let mut zeroed = Vec::new();
                for (index, field) in fields.unnamed.iter().enumerate() {
                    let binding = format_ident!("field_{index}");
                    let transform = generate_field_transform(
                        ctx,
                        field,
                        &index.to_string(),
                        true,
                        &quote! { #binding },
                    )?;
                    bindings.push(binding);
                    masked.push(transform.masked);
                    zeroed.push(transform.zeroed);
                }
                let pattern = quote! { Self::#variant_ident(#(#bindings),*) };
                mask_arms.push(quote! {
                    #pattern => ::core::result::Result::Ok(Self::#variant_ident(#(#masked),*)),
                });
                zeroed_arms.push(quote! {
                    #pattern => Self::#variant_ident(#(#zeroed),*),
                });
            }
            Fields::Unit => {
                mask_arms.push(quote! {
                    Self::#variant_ident => ::core::result::Result::Ok(Self::#variant_ident),
                });
                zeroed_arms.push(quote! {
                    Self::#variant_ident => Self::#variant_ident,
                });
            }
        }
    }

    Ok(DeriveOutput {
        mask_body: quote! {
            #[allow(unused_variables)]
            let fields = masker.describe::<Self>();
            match self {
                #(#mask_arms)*
            }
        },
        zeroed_body: quote! {
            match self {
                #(#zeroed_arms)*
            }
        },
    })
}
