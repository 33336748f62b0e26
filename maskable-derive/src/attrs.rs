//! Parsing of `#[mask(...)]` field attributes.
//!
//! This module maps attribute syntax to field options and produces
//! structured errors for invalid forms.
//!
//! | Attribute                         | Effect                                      |
//! |-----------------------------------|---------------------------------------------|
//! | None                              | Walk the field; registry rules may apply    |
//! | `#[mask("rule")]`                 | Rule under the default `mask` keyword       |
//! | `#[mask(keyword = "rule")]`       | Rule under another keyword                  |
//! | `#[mask(opaque)]`                 | Copy unchanged, never traversed             |

use proc_macro2::Span;
use syn::{
    Attribute, Ident, LitStr, Meta, Result, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
};

/// Keyword used by `#[mask("rule")]`.
pub(crate) const DEFAULT_KEYWORD: &str = "mask";

/// One `(keyword, rule)` pair read from a field.
#[derive(Clone, Debug)]
pub(crate) struct Annotation {
    pub(crate) keyword: String,
    pub(crate) rule: LitStr,
}

/// Everything the attributes say about one field.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) opaque: bool,
}

enum MaskItem {
    Rule(LitStr),
    Keyed(Ident, LitStr),
    Opaque(Span),
}

impl Parse for MaskItem {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self::Rule(input.parse()?));
        }
        let ident = input.call(Ident::parse_any)?;
        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            return Ok(Self::Keyed(ident, input.parse()?));
        }
        if ident == "opaque" {
            return Ok(Self::Opaque(ident.span()));
        }
        Err(syn::Error::new(
            ident.span(),
            "expected `\"rule\"`, `keyword = \"rule\"` or `opaque`",
        ))
    }
}

impl FieldOptions {
    fn push(&mut self, keyword: String, rule: LitStr, span: Span) -> Result<()> {
        if self.annotations.iter().any(|a| a.keyword == keyword) {
            return Err(syn::Error::new(
                span,
                format!("duplicate `{keyword}` rule on the same field"),
            ));
        }
        self.annotations.push(Annotation { keyword, rule });
        Ok(())
    }
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    let mut opaque_span = None;

    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }

        let list = match &attr.meta {
            Meta::List(list) => list,
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "missing rule: use #[mask(\"rule\")] (e.g., #[mask(\"filled\")])",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[mask(\"rule\")] syntax (e.g., #[mask(\"hash\")])",
                ));
            }
        };

        let items = list.parse_args_with(Punctuated::<MaskItem, Token![,]>::parse_terminated)?;
        if items.is_empty() {
            return Err(syn::Error::new(attr.span(), "empty #[mask()] attribute"));
        }
        for item in items {
            match item {
                MaskItem::Rule(rule) => {
                    let span = rule.span();
                    options.push(DEFAULT_KEYWORD.to_owned(), rule, span)?;
                }
                MaskItem::Keyed(keyword, rule) => {
                    options.push(keyword.unraw().to_string(), rule, keyword.span())?;
                }
                MaskItem::Opaque(span) => {
                    if options.opaque {
                        return Err(syn::Error::new(span, "duplicate `opaque` on the same field"));
                    }
                    options.opaque = true;
                    opaque_span = Some(span);
                }
            }
        }
    }

    if let Some(span) = opaque_span
        && !options.annotations.is_empty()
    {
        return Err(syn::Error::new(
            span,
            "`opaque` fields are copied unchanged and cannot also carry rules",
        ));
    }

    Ok(options)
}

/// Rejects `#[mask]` on the struct or enum itself.
pub(crate) fn reject_container_attrs(attrs: &[Attribute]) -> Result<()> {
    for attr in attrs {
        if attr.path().is_ident("mask") {
            return Err(syn::Error::new(
                attr.span(),
                "`#[mask]` is a field attribute; put it on the fields to mask",
            ));
        }
    }
    Ok(())
}
