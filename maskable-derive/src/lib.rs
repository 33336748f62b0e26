//! Derive macro for `maskable`.
//!
//! This crate generates the code behind `#[derive(Maskable)]`. It:
//! - reads `#[mask(...)]` field attributes into a static field table
//! - emits `Composite` and `Maskable` implementations that rebuild the value
//!   field by field through a `Masker`
//!
//! It does **not** interpret rules. Rule strings are kept verbatim and
//! resolved by the `maskable` runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod attrs;
mod derive_enum;
mod derive_struct;
mod generics;
mod transform;
mod types;
use attrs::reject_container_attrs;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_mask_bounds;
use transform::DeriveContext;

/// Derives `maskable::Maskable` and `maskable::Composite` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: The field is walked. A rule registered for the field
///   name applies if there is one; nested values are masked by their own
///   field rules.
///
/// - `#[mask("rule")]`: The rule (e.g. `"filled4"`, `"hash"`) applies to the
///   field when the masker's tag name is `mask` (the default).
///
/// - `#[mask(keyword = "rule")]`: The rule applies when the masker's tag name
///   is `keyword`. Several keywords can be combined:
///   `#[mask("zero", fake = "hash")]`.
///
/// - `#[mask(opaque)]`: The field is cloned and never traversed. Use this for
///   foreign types that do not implement `Maskable`; the type must be
///   `Clone + Default`.
///
/// # Visibility
///
/// Struct fields without any `pub` are never copied: the masked value holds
/// their zero value. Enum variant fields are always copied.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Maskable, attributes(mask))]
pub fn derive_maskable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the maskable crate root.
///
/// Handles crate renaming (e.g., `my_mask = { package = "maskable", ... }`)
/// and the case where the derive is used inside the maskable crate itself.
fn crate_root() -> TokenStream {
    match crate_name("maskable") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::maskable },
    }
}

struct DeriveOutput {
    mask_body: TokenStream,
    zeroed_body: TokenStream,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attrs(&attrs)?;

    let crate_root = crate_root();
    let mut ctx = DeriveContext::new(&generics, &crate_root);
    let DeriveOutput {
        mask_body,
        zeroed_body,
    } = match &data {
        Data::Struct(data) => derive_struct(&mut ctx, data)?,
        Data::Enum(data) => derive_enum(&mut ctx, data)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "`Maskable` cannot be derived for unions",
            ));
        }
    };
    let DeriveContext {
        field_infos,
        walked_generics,
        opaque_generics,
        ..
    } = ctx;

    let bounded = add_mask_bounds(
        generics.clone(),
        &crate_root,
        &walked_generics,
        &opaque_generics,
    );
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #crate_root::Composite for #ident #ty_generics #where_clause {
            fn fields() -> &'static [#crate_root::FieldInfo] {
                const FIELDS: &[#crate_root::FieldInfo] = &[#(#field_infos),*];
                FIELDS
            }
        }

        #[automatically_derived]
        impl #impl_generics #crate_root::Maskable for #ident #ty_generics #where_clause {
            fn mask_with(
                &self,
                masker: &#crate_root::Masker,
                rule: &str,
            ) -> ::core::result::Result<Self, #crate_root::MaskError> {
                if let ::core::option::Option::Some(masked) = masker.apply_any(rule, self)? {
                    return ::core::result::Result::Ok(masked);
                }
                #mask_body
            }

            #[allow(unused_variables)]
            fn zeroed(&self) -> Self {
                #zeroed_body
            }
        }
    })
}
