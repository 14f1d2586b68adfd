//! Named store handles
//!
//! Some hosts share one journal between several components by key. The
//! registry is an ordinary value owned by the host; there is no global slot.

use crate::store::JournalStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Key the hosting application uses for its main journal
pub const DEFAULT_SLOT: &str = "journals";

/// Map from slot name to a lazily created store
#[derive(Debug, Default)]
pub struct JournalRegistry {
    slots: RwLock<HashMap<String, JournalStore>>,
}

impl JournalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the store under `name`, creating an empty one on first use
    pub fn slot(&self, name: &str) -> JournalStore {
        if let Some(store) = self.slots.read().get(name) {
            return store.clone();
        }
        self.slots
            .write()
            .entry(name.to_string())
            .or_default()
            .clone()
    }

    /// Handle to the [`DEFAULT_SLOT`] store
    pub fn journals(&self) -> JournalStore {
        self.slot(DEFAULT_SLOT)
    }

    /// Names of the slots created so far
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.slots.read().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewEntry;

    #[test]
    fn test_same_key_same_store() {
        let registry = JournalRegistry::new();
        let first = registry.journals();
        first.add(NewEntry::new("A", "c", "d", "t"));

        let second = registry.slot(DEFAULT_SLOT);
        assert_eq!(second.len(), 1);
        assert_eq!(registry.names(), [DEFAULT_SLOT]);
    }

    #[test]
    fn test_keys_are_isolated() {
        let registry = JournalRegistry::new();
        registry.slot("work").add(NewEntry::new("A", "c", "d", "t"));

        assert!(registry.slot("home").is_empty());
        assert_eq!(registry.slot("work").len(), 1);
        assert_eq!(registry.names(), ["home", "work"]);
    }

    #[test]
    fn test_registries_are_independent() {
        let one = JournalRegistry::new();
        let two = JournalRegistry::new();
        one.journals().add(NewEntry::new("A", "c", "d", "t"));
        assert!(two.journals().is_empty());
    }
}
