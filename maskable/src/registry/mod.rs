//! Handler and field-name registries owned by a [`Masker`](crate::Masker).

mod fields;
mod handlers;

pub(crate) use fields::FieldRegistry;
pub(crate) use handlers::{HandlerRegistry, HandlerTable};
pub use handlers::{
    AnyMaskFn, FloatMaskFn, MaskHandler, MaskKind, MaskRule, SignedMaskFn, TextMaskFn,
    UnsignedMaskFn,
};
