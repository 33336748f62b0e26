//! Masking traversal for wrapper types.

use std::sync::Arc;

use crate::{engine::Maskable, error::MaskError, masker::Masker};

// =============================================================================
// Wrapper container implementations
// =============================================================================

impl<T> Maskable for Option<T>
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        self.as_ref()
            .map(|value| value.mask_with(masker, rule))
            .transpose()
    }

    fn zeroed(&self) -> Self {
        None
    }
}

impl<T, E> Maskable for Result<T, E>
where
    T: Maskable,
    E: Maskable,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        Ok(match self {
            Ok(value) => Ok(value.mask_with(masker, rule)?),
            Err(err) => Err(err.mask_with(masker, rule)?),
        })
    }

    fn zeroed(&self) -> Self {
        match self {
            Ok(value) => Ok(value.zeroed()),
            Err(err) => Err(err.zeroed()),
        }
    }
}

impl<T> Maskable for Box<T>
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        Ok(Box::new((**self).mask_with(masker, rule)?))
    }

    fn zeroed(&self) -> Self {
        Box::new((**self).zeroed())
    }

    fn as_key_name(&self) -> Option<&str> {
        (**self).as_key_name()
    }
}

impl<T> Maskable for Arc<T>
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        Ok(Arc::new((**self).mask_with(masker, rule)?))
    }

    fn zeroed(&self) -> Self {
        Arc::new((**self).zeroed())
    }

    fn as_key_name(&self) -> Option<&str> {
        (**self).as_key_name()
    }
}

// =============================================================================
// Tuples (every element gets the tuple's rule)
// =============================================================================

macro_rules! impl_maskable_tuple {
    ($($name:ident),+) => {
        impl<$($name: Maskable),+> Maskable for ($($name,)+) {
            #[allow(non_snake_case)]
            fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
                if let Some(masked) = masker.apply_any(rule, self)? {
                    return Ok(masked);
                }
                let ($($name,)+) = self;
                Ok(($($name.mask_with(masker, rule)?,)+))
            }

            #[allow(non_snake_case)]
            fn zeroed(&self) -> Self {
                let ($($name,)+) = self;
                ($($name.zeroed(),)+)
            }
        }
    };
}

impl_maskable_tuple!(A);
impl_maskable_tuple!(A, B);
impl_maskable_tuple!(A, B, C);
impl_maskable_tuple!(A, B, C, D);
