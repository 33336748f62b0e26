//! Masking traversal for map containers (values only).

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::{engine::Maskable, error::MaskError, masker::Masker};

/// Masks one map value.
///
/// The map's own rule wins. Without one, a key with a text name selects the
/// rule registered for that name, and errors carry the key as field context.
pub(crate) fn mask_entry<K, V>(masker: &Masker, rule: &str, key: &K, value: &V) -> Result<V, MaskError>
where
    K: Maskable,
    V: Maskable,
{
    let Some(name) = key.as_key_name() else {
        return value.mask_with(masker, rule);
    };
    let registered;
    let rule = if rule.is_empty() {
        registered = masker.field_rule(name);
        registered.as_deref().unwrap_or_default()
    } else {
        rule
    };
    value
        .mask_with(masker, rule)
        .map_err(|err| err.within(name))
}

// =============================================================================
// Map implementations (values only, keys unchanged)
// =============================================================================

impl<K, V, S> Maskable for HashMap<K, V, S>
where
    K: Maskable + Eq + Hash,
    V: Maskable,
    S: BuildHasher + Clone + Send + Sync + 'static,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            result.insert(key.clone(), mask_entry(masker, rule, key, value)?);
        }
        Ok(result)
    }

    fn zeroed(&self) -> Self {
        HashMap::with_hasher(self.hasher().clone())
    }
}

impl<K, V> Maskable for BTreeMap<K, V>
where
    K: Maskable + Ord,
    V: Maskable,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        self.iter()
            .map(|(key, value)| Ok((key.clone(), mask_entry(masker, rule, key, value)?)))
            .collect()
    }

    fn zeroed(&self) -> Self {
        BTreeMap::new()
    }
}
