//! Masking traversal for sequences: every element gets the sequence's rule.

use std::collections::VecDeque;

use crate::{engine::Maskable, error::MaskError, masker::Masker};

impl<T> Maskable for Vec<T>
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        self.iter()
            .map(|value| value.mask_with(masker, rule))
            .collect()
    }

    fn zeroed(&self) -> Self {
        Vec::new()
    }
}

impl<T> Maskable for VecDeque<T>
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        self.iter()
            .map(|value| value.mask_with(masker, rule))
            .collect()
    }

    fn zeroed(&self) -> Self {
        VecDeque::new()
    }
}

impl<T> Maskable for Box<[T]>
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        self.iter()
            .map(|value| value.mask_with(masker, rule))
            .collect()
    }

    fn zeroed(&self) -> Self {
        Box::default()
    }
}

/// Fixed-size arrays keep their length; `zeroed` zeroes each slot.
impl<T, const N: usize> Maskable for [T; N]
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        let mut masked = self.clone();
        for (slot, value) in masked.iter_mut().zip(self) {
            *slot = value.mask_with(masker, rule)?;
        }
        Ok(masked)
    }

    fn zeroed(&self) -> Self {
        std::array::from_fn(|index| self[index].zeroed())
    }
}
