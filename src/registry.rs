//! Process/engine-scoped mapping from absolute URI (fragment stripped) to a
//! loaded schema root.
//!
//! Grounded on `resolver::Resolver`'s `store: RwLock<AHashMap<...>>` field:
//! a `parking_lot::RwLock` guarding an `ahash` map, written through a single
//! insertion point that is idempotent (first-writer-wins), matching spec §3's
//! registry invariant ("at most one entry per key; writes are idempotent").
use ahash::AHashMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Default)]
pub(crate) struct Registry {
    entries: RwLock<AHashMap<String, Arc<Value>>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Registry {
            entries: RwLock::new(AHashMap::new()),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<Arc<Value>> {
        self.entries.read().get(key).cloned()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Register `value` under `key` unless an entry already exists.
    /// Returns `true` if this call performed the insertion.
    pub(crate) fn insert_if_absent(&self, key: String, value: Arc<Value>) -> bool {
        let mut entries = self.entries.write();
        if entries.contains_key(&key) {
            false
        } else {
            entries.insert(key, value);
            true
        }
    }

    pub(crate) fn clear(&self) {
        self.entries.write().clear();
    }

    /// A read-only snapshot, used by the facade's `schemas()` accessor.
    pub(crate) fn snapshot(&self) -> AHashMap<String, Arc<Value>> {
        self.entries.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_are_first_writer_wins() {
        let registry = Registry::new();
        let first = Arc::new(json!({"type": "integer"}));
        let second = Arc::new(json!({"type": "string"}));
        assert!(registry.insert_if_absent("urn:a".to_string(), first.clone()));
        assert!(!registry.insert_if_absent("urn:a".to_string(), second));
        assert_eq!(registry.get("urn:a"), Some(first));
    }

    #[test]
    fn clear_empties_the_registry() {
        let registry = Registry::new();
        registry.insert_if_absent("urn:a".to_string(), Arc::new(json!(true)));
        registry.clear();
        assert!(!registry.contains("urn:a"));
    }
}
