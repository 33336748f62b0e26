//! Per-type field descriptor cache.

use std::{any::TypeId, sync::Arc};

use dashmap::DashMap;

use crate::descriptor::{Composite, FieldDescriptor};

/// Field descriptors keyed by type identity.
///
/// Concurrent misses for the same type may compute the descriptors more
/// than once; the last insert wins and every result is equivalent.
#[derive(Debug, Default)]
pub(crate) struct TypeCache {
    entries: DashMap<TypeId, Entry>,
}

#[derive(Debug)]
struct Entry {
    tag_name: Box<str>,
    fields: Arc<[FieldDescriptor]>,
}

impl TypeCache {
    /// Returns the descriptors of `T` under `tag_name`.
    ///
    /// With `enabled` false nothing is read from or written to the cache. An
    /// entry computed under another keyword is replaced.
    pub(crate) fn resolve<T: Composite>(&self, tag_name: &str, enabled: bool) -> Arc<[FieldDescriptor]> {
        if !enabled {
            return describe::<T>(tag_name);
        }
        let key = TypeId::of::<T>();
        if let Some(entry) = self.entries.get(&key)
            && *entry.tag_name == *tag_name
        {
            return Arc::clone(&entry.fields);
        }
        let descriptors = describe::<T>(tag_name);
        self.entries.insert(
            key,
            Entry {
                tag_name: Box::from(tag_name),
                fields: Arc::clone(&descriptors),
            },
        );
        descriptors
    }

    pub(crate) fn clear(&self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

fn describe<T: Composite>(tag_name: &str) -> Arc<[FieldDescriptor]> {
    T::fields()
        .iter()
        .map(|field| field.describe(tag_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Annotation, FieldInfo};

    struct Profile;

    impl Composite for Profile {
        fn fields() -> &'static [FieldInfo] {
            const FIELDS: &[FieldInfo] = &[
                FieldInfo::new("id", true, &[]),
                FieldInfo::new("name", true, &[Annotation::new("mask", "filled")]),
            ];
            FIELDS
        }
    }

    mod other {
        use crate::descriptor::{Annotation, Composite, FieldInfo};

        pub(super) struct Profile;

        impl Composite for Profile {
            fn fields() -> &'static [FieldInfo] {
                const FIELDS: &[FieldInfo] =
                    &[FieldInfo::new("secret", false, &[Annotation::new("mask", "hash")])];
                FIELDS
            }
        }
    }

    #[test]
    fn resolve_caches_once_per_type() {
        let cache = TypeCache::default();
        let first = cache.resolve::<Profile>("mask", true);
        let second = cache.resolve::<Profile>("mask", true);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(first[1].rule(), Some("filled"));
    }

    #[test]
    fn disabled_cache_stores_nothing() {
        let cache = TypeCache::default();
        let descriptors = cache.resolve::<Profile>("mask", false);

        assert_eq!(descriptors.len(), 2);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn same_named_types_get_separate_entries() {
        let cache = TypeCache::default();
        let outer = cache.resolve::<Profile>("mask", true);
        let inner = cache.resolve::<other::Profile>("mask", true);

        assert_eq!(cache.len(), 2);
        assert_eq!(outer[0].name(), "id");
        assert_eq!(inner[0].name(), "secret");
        assert_eq!(inner[0].rule(), Some("hash"));
    }

    #[test]
    fn clear_forces_recompute() {
        let cache = TypeCache::default();
        let before = cache.resolve::<Profile>("mask", true);
        cache.clear();
        let after = cache.resolve::<Profile>("fake", true);

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after[1].rule(), None);
    }
}
