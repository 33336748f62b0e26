//! Field-name override registry.
//!
//! Assigns rules to field names and text map keys for types whose
//! definitions cannot carry annotations.

use std::{collections::HashMap, sync::Arc};

/// Rules keyed by exact, case-sensitive field name.
#[derive(Debug, Default)]
pub(crate) struct FieldRegistry {
    rules: HashMap<String, Arc<str>>,
}

impl FieldRegistry {
    pub(crate) fn insert(&mut self, name: &str, rule: &str) {
        self.rules.insert(name.to_owned(), Arc::from(rule));
    }

    pub(crate) fn get(&self, name: &str) -> Option<Arc<str>> {
        self.rules.get(name).cloned()
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Arc<str>> {
        self.rules.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldRegistry;

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let mut registry = FieldRegistry::default();
        registry.insert("Name", "filled");

        assert_eq!(registry.get("Name").as_deref(), Some("filled"));
        assert_eq!(registry.get("name"), None);
        assert_eq!(registry.get("Name2"), None);
    }

    #[test]
    fn last_writer_wins() {
        let mut registry = FieldRegistry::default();
        registry.insert("Age", "random100");
        registry.insert("Age", "zero");
        assert_eq!(registry.get("Age").as_deref(), Some("zero"));
    }

    #[test]
    fn remove_drops_rule() {
        let mut registry = FieldRegistry::default();
        registry.insert("Age", "zero");
        assert_eq!(registry.remove("Age").as_deref(), Some("zero"));
        assert_eq!(registry.get("Age"), None);
    }
}
