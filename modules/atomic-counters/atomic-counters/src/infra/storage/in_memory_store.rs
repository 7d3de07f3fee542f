//! In-memory counter store.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use atomic_counters_sdk::{CounterHandle, CounterStore};
use dashmap::DashMap;
use tracing::debug;

/// Process-local atomic counter.
///
/// Arithmetic wraps on overflow.
pub struct InMemoryCounter {
    key: String,
    value: AtomicI64,
}

impl InMemoryCounter {
    fn new(key: &str, initial: i64) -> Self {
        Self {
            key: key.to_owned(),
            value: AtomicI64::new(initial),
        }
    }
}

impl CounterHandle for InMemoryCounter {
    fn key(&self) -> &str {
        &self.key
    }

    fn get(&self) -> anyhow::Result<i64> {
        Ok(self.value.load(Ordering::SeqCst))
    }

    fn add_and_get(&self, delta: i64) -> anyhow::Result<i64> {
        let previous = self.value.fetch_add(delta, Ordering::SeqCst);
        Ok(previous.wrapping_add(delta))
    }
}

/// Counter store backed by a sharded concurrent map.
///
/// Counters live as long as the store unless explicitly removed.
#[derive(Default)]
pub struct InMemoryCounterStore {
    counters: DashMap<String, Arc<InMemoryCounter>>,
}

impl InMemoryCounterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `key`, if the counter exists.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<i64> {
        self.counters
            .get(key)
            .map(|c| c.value.load(Ordering::SeqCst))
    }

    /// Removes the counter named `key`. Handles already resolved stay usable
    /// but are detached from the store.
    pub fn remove(&self, key: &str) -> bool {
        self.counters.remove(key).is_some()
    }

    /// Keys of all counters, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.counters.iter().map(|e| e.key().clone()).collect();
        keys.sort_unstable();
        keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl CounterStore for InMemoryCounterStore {
    fn get_or_create(&self, key: &str, initial: i64) -> anyhow::Result<Arc<dyn CounterHandle>> {
        if let Some(existing) = self.counters.get(key) {
            let counter: Arc<InMemoryCounter> = Arc::clone(existing.value());
            let handle: Arc<dyn CounterHandle> = counter;
            return Ok(handle);
        }

        let counter = Arc::clone(
            self.counters
                .entry(key.to_owned())
                .or_insert_with(|| {
                    debug!(key, initial, "creating counter");
                    Arc::new(InMemoryCounter::new(key, initial))
                })
                .value(),
        );
        let handle: Arc<dyn CounterHandle> = counter;
        Ok(handle)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn creates_counter_with_initial_value() {
        let store = InMemoryCounterStore::new();
        let counter = store.get_or_create("a", 10).unwrap();
        assert_eq!(counter.key(), "a");
        assert_eq!(counter.get().unwrap(), 10);
        assert_eq!(store.value("a"), Some(10));
    }

    #[test]
    fn existing_counter_keeps_its_value() {
        let store = InMemoryCounterStore::new();
        store.get_or_create("a", 10).unwrap().add_and_get(5).unwrap();

        let again = store.get_or_create("a", 99).unwrap();

        assert_eq!(again.get().unwrap(), 15);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn handles_share_state() {
        let store = InMemoryCounterStore::new();
        let first = store.get_or_create("a", 0).unwrap();
        let second = store.get_or_create("a", 0).unwrap();

        first.add_and_get(2).unwrap();
        assert_eq!(second.add_and_get(3).unwrap(), 5);
    }

    #[test]
    fn add_and_get_wraps_on_overflow() {
        let store = InMemoryCounterStore::new();
        let counter = store.get_or_create("max", i64::MAX).unwrap();
        assert_eq!(counter.add_and_get(1).unwrap(), i64::MIN);
    }

    #[test]
    fn remove_and_keys() {
        let store = InMemoryCounterStore::new();
        assert!(store.is_empty());
        store.get_or_create("b", 0).unwrap();
        store.get_or_create("a", 0).unwrap();

        assert_eq!(store.keys(), vec!["a".to_owned(), "b".to_owned()]);
        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert_eq!(store.value("a"), None);
        assert_eq!(store.keys(), vec!["b".to_owned()]);
    }

    #[test]
    fn concurrent_adds_are_not_lost() {
        let store = Arc::new(InMemoryCounterStore::new());
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        store.get_or_create("shared", 0).unwrap().add_and_get(1).unwrap();
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        assert_eq!(store.value("shared"), Some(8000));
    }
}
