//! Ordered key-value store the module persists into.
//!
//! The host supplies a durable implementation; [`MemoryStore`] keeps keys in
//! a `BTreeMap` and serves tests and tooling. Iteration is always in
//! ascending byte order of the key.

use std::collections::BTreeMap;

/// Iterator over `(key, value)` pairs.
pub type StoreIterator<'a> = Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a>;

pub trait KvStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn set(&mut self, key: &[u8], value: &[u8]);

    /// Removes `key`; a no-op when absent.
    fn delete(&mut self, key: &[u8]);

    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Every entry whose key starts with `prefix`, in ascending key order.
    /// Returned keys still carry the prefix.
    fn prefix_iter(&self, prefix: &[u8]) -> StoreIterator<'_>;
}

/// `BTreeMap`-backed store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.data.insert(key.to_vec(), value.to_vec());
    }

    fn delete(&mut self, key: &[u8]) {
        self.data.remove(key);
    }

    fn has(&self, key: &[u8]) -> bool {
        self.data.contains_key(key)
    }

    fn prefix_iter(&self, prefix: &[u8]) -> StoreIterator<'_> {
        let prefix = prefix.to_vec();
        Box::new(
            self.data
                .range(prefix.clone()..)
                .take_while(move |(key, _)| key.starts_with(&prefix))
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }
}

/// Joins a namespace prefix and a record key.
pub fn prefixed_key(prefix: &[u8], key: &[u8]) -> Vec<u8> {
    let mut full = Vec::with_capacity(prefix.len() + key.len());
    full.extend_from_slice(prefix);
    full.extend_from_slice(key);
    full
}

/// Scans one namespace, yielding keys with the prefix stripped.
pub fn prefix_scan<'a>(
    store: &'a dyn KvStore,
    prefix: &'a [u8],
) -> impl Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a {
    store
        .prefix_iter(prefix)
        .map(move |(key, value)| (key[prefix.len()..].to_vec(), value))
}
