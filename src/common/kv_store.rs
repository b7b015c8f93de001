//! A closure-pair key-value adapter.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

/// Get/set over some keyed storage, abstracted behind two closures.
///
/// `set(key, None)` removes the entry. This is an adapter, not a feature:
/// collaborators that persist things wrap one of these and decide themselves
/// what backs it: [`in_memory`](KeyValueStore::in_memory) here, a file- or
/// platform-backed pair in application code.
///
/// # Examples
///
/// ```rust
/// use feature_container::common::KeyValueStore;
///
/// let store: KeyValueStore<String, u32> = KeyValueStore::in_memory();
/// store.set("visits".to_string(), Some(3));
/// assert_eq!(store.get(&"visits".to_string()), Some(3));
/// store.set("visits".to_string(), None);
/// assert_eq!(store.get(&"visits".to_string()), None);
/// ```
#[derive(Clone)]
pub struct KeyValueStore<K, V> {
    get: Arc<dyn Fn(&K) -> Option<V> + Send + Sync>,
    set: Arc<dyn Fn(K, Option<V>) + Send + Sync>,
}

impl<K, V> KeyValueStore<K, V> {
    /// Builds a store from its two operation closures.
    pub fn new(
        get: impl Fn(&K) -> Option<V> + Send + Sync + 'static,
        set: impl Fn(K, Option<V>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// The value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        (self.get)(key)
    }

    /// Stores `value` under `key`; `None` removes the entry.
    pub fn set(&self, key: K, value: Option<V>) {
        (self.set)(key, value)
    }
}

impl<K, V> KeyValueStore<K, V>
where
    K: Eq + Hash + Send + 'static,
    V: Clone + Send + 'static,
{
    /// A process-local store backed by a hash map. Clones share the map.
    pub fn in_memory() -> Self {
        let entries = Arc::new(Mutex::new(HashMap::new()));
        let reader = Arc::clone(&entries);
        Self::new(
            move |key| reader.lock().get(key).cloned(),
            move |key, value| match value {
                Some(value) => {
                    entries.lock().insert(key, value);
                }
                None => {
                    entries.lock().remove(&key);
                }
            },
        )
    }
}
