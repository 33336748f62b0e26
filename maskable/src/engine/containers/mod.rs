//! `Maskable` implementations for standard library types.
//!
//! Containers (`Option`, `Vec`, `Box`, maps, sets) recurse into their
//! contents with the rule they were given. Every implementation offers the
//! whole value to the any-kind table first, so `zero` applies to containers
//! as a whole.
//!
//! ## Map Keys Are Not Masked
//!
//! For map containers (`HashMap`, `BTreeMap`), only **values** are masked.
//! Keys are cloned unchanged. A map without a rule of its own masks each
//! value with the rule registered for the key's text name.
//!
//! ## Set Masking Can Collapse Elements
//!
//! For set containers (`HashSet`, `BTreeSet`), each element is masked and the
//! results are collected back into a set. If masking maps several elements to
//! the same value (e.g., `fixed`), the resulting set shrinks.

pub(crate) mod maps;
mod passthrough;
mod scalars;
mod sequences;
mod sets;
mod wrappers;


pub use passthrough::Opaque;

// =============================================================================
// Opaque implementation helper
// =============================================================================

/// Implements `Maskable` for a leaf type that only honours any-kind rules.
macro_rules! impl_maskable_opaque {
    ($ty:ty) => {
        impl_maskable_opaque!($ty, <$ty as ::core::default::Default>::default());
    };
    ($ty:ty, $zero:expr) => {
        impl crate::engine::Maskable for $ty {
            fn mask_with(
                &self,
                masker: &crate::masker::Masker,
                rule: &str,
            ) -> Result<Self, crate::error::MaskError> {
                Ok(masker.apply_any(rule, self)?.unwrap_or_else(|| self.clone()))
            }

            fn zeroed(&self) -> Self {
                $zero
            }
        }
    };
}

pub(crate) use impl_maskable_opaque;
