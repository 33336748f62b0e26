//! Scalar leaves: text, integers and floats.

use std::{borrow::Cow, sync::Arc};

use super::impl_maskable_opaque;
use crate::{engine::Maskable, error::MaskError, masker::Masker};

// =============================================================================
// Text
// =============================================================================

macro_rules! impl_maskable_text {
    ($ty:ty) => {
        impl Maskable for $ty {
            fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
                if let Some(masked) = masker.apply_any(rule, self)? {
                    return Ok(masked);
                }
                Ok(match masker.apply_text(rule, self)? {
                    Some(text) => <$ty>::from(text),
                    None => self.clone(),
                })
            }

            fn zeroed(&self) -> Self {
                <$ty>::from(String::new())
            }

            fn as_key_name(&self) -> Option<&str> {
                Some(AsRef::<str>::as_ref(self))
            }
        }
    };
}

impl_maskable_text!(String);
impl_maskable_text!(Box<str>);
impl_maskable_text!(Arc<str>);
impl_maskable_text!(Cow<'static, str>);

// =============================================================================
// Integers
// =============================================================================

macro_rules! impl_maskable_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Maskable for $ty {
                fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
                    if let Some(masked) = masker.apply_any(rule, self)? {
                        return Ok(masked);
                    }
                    let wide = i64::try_from(*self)
                        .map_err(|_| MaskError::out_of_range(rule, self, "i64"))?;
                    let range = i64::try_from(<$ty>::MIN).unwrap_or(i64::MIN)
                        ..=i64::try_from(<$ty>::MAX).unwrap_or(i64::MAX);
                    match masker.apply_signed(rule, wide, range)? {
                        Some(masked) => <$ty>::try_from(masked)
                            .map_err(|_| MaskError::out_of_range(rule, masked, stringify!($ty))),
                        None => Ok(*self),
                    }
                }

                fn zeroed(&self) -> Self {
                    0
                }
            }
        )*
    };
}

macro_rules! impl_maskable_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Maskable for $ty {
                fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
                    if let Some(masked) = masker.apply_any(rule, self)? {
                        return Ok(masked);
                    }
                    let wide = u64::try_from(*self)
                        .map_err(|_| MaskError::out_of_range(rule, self, "u64"))?;
                    let range = 0..=u64::try_from(<$ty>::MAX).unwrap_or(u64::MAX);
                    match masker.apply_unsigned(rule, wide, range)? {
                        Some(masked) => <$ty>::try_from(masked)
                            .map_err(|_| MaskError::out_of_range(rule, masked, stringify!($ty))),
                        None => Ok(*self),
                    }
                }

                fn zeroed(&self) -> Self {
                    0
                }
            }
        )*
    };
}

impl_maskable_signed!(i8, i16, i32, i64, isize);
impl_maskable_unsigned!(u8, u16, u32, u64, usize);

// 128-bit integers do not fit the widened handler signatures.
impl_maskable_opaque!(i128);
impl_maskable_opaque!(u128);

// =============================================================================
// Floats
// =============================================================================

impl Maskable for f64 {
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        Ok(masker.apply_float(rule, *self)?.unwrap_or(*self))
    }

    fn zeroed(&self) -> Self {
        0.0
    }
}

impl Maskable for f32 {
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        match masker.apply_float(rule, f64::from(*self))? {
            Some(masked) if masked.is_finite() && masked.abs() > f64::from(f32::MAX) => {
                Err(MaskError::out_of_range(rule, masked, "f32"))
            }
            #[allow(clippy::cast_possible_truncation)]
            Some(masked) => Ok(masked as f32),
            None => Ok(*self),
        }
    }

    fn zeroed(&self) -> Self {
        0.0
    }
}

// =============================================================================
// Other primitives (any-kind rules only)
// =============================================================================

impl_maskable_opaque!(bool);
impl_maskable_opaque!(char);
impl_maskable_opaque!(());
