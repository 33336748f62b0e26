//! Masking traversal for set containers.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::{engine::Maskable, error::MaskError, masker::Masker};

impl<T, S> Maskable for HashSet<T, S>
where
    T: Maskable + Eq + Hash,
    S: BuildHasher + Clone + Send + Sync + 'static,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        let mut result = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for value in self {
            result.insert(value.mask_with(masker, rule)?);
        }
        Ok(result)
    }

    fn zeroed(&self) -> Self {
        HashSet::with_hasher(self.hasher().clone())
    }
}

impl<T> Maskable for BTreeSet<T>
where
    T: Maskable + Ord,
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
        BTreeSet::new()
    }
}
