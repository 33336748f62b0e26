//! Rule-driven masking of sensitive fields in nested data.
//!
//! This crate produces masked deep copies of values before they are logged,
//! serialized or displayed. The original value is never modified.
//!
//! Rules are attached to fields:
//! - **Annotations**: `#[mask("filled")]` on a field of a `#[derive(Maskable)]` type.
//! - **Field-name registry**: `register_field_rule("Name", "filled")` for types
//!   that cannot be annotated, also matched against text map keys.
//!
//! A rule is a registered name plus an optional argument (`filled4`,
//! `random1000`, `random100000.4`). The built-in rules are `zero`, `filled`,
//! `fixed`, `hash` and `random`; custom handlers are registered per kind of
//! value (text, signed, unsigned, float, any).
//!
//! What this crate does:
//! - walks structs, enums, `Option`, `Box`/`Arc`, sequences, sets, maps and
//!   dynamically typed values
//! - caches per-type field descriptors
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - perform I/O or logging
//! - classify data as sensitive on its own
//!
//! The `Maskable` derive macro lives in `maskable-derive` and is re-exported
//! from this crate.

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
    clippy::option_if_let_else,
    clippy::return_self_not_must_use
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use maskable_derive::Maskable;

#[allow(unused_extern_crates)]
extern crate self as maskable;

// Module declarations
mod cache;
mod config;
mod descriptor;
mod engine;
mod error;
mod global;
mod masker;
mod output;
mod registry;
pub mod rules;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod transform;

pub use config::{DEFAULT_TAG_NAME, FIXED_LEN, MASK_CHAR, MaskerConfig};
pub use descriptor::{Annotation, Composite, FieldDescriptor, FieldInfo};
pub use engine::{Dynamic, Maskable, MaskableAny, MaskableExt, Opaque};
pub use error::MaskError;
pub use global::{
    default_masker, field_rule, mask, mask_float, mask_int, mask_string, mask_uint,
    register_any_handler, register_field_rule, register_float_handler, register_handler,
    register_signed_handler, register_text_handler, register_unsigned_handler, set_cache_enabled,
    set_mask_char, set_tag_name,
};
pub use masker::Masker;
#[cfg(feature = "json")]
pub use output::{MaskedJson, MaskedJsonExt, MaskedJsonRef};
pub use output::{MaskedOutput, MaskedOutputExt, MaskedOutputRef, ToMaskedOutput};
pub use registry::{
    AnyMaskFn, FloatMaskFn, MaskHandler, MaskKind, MaskRule, SignedMaskFn, TextMaskFn,
    UnsignedMaskFn,
};
#[cfg(feature = "slog")]
pub use slog::SlogMaskedExt;
