// Shared hash table: one read-write lock guarding a whole HashTable
//
// HashTable itself is single-owner. Callers that need to reach one table from
// several threads wrap it here; every operation takes the lock for its full
// duration, including any resize a put triggers.

use crate::infrastructure::hash::{HashFunction, KeyHasher};
use crate::infrastructure::hash_table::HashTable;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A `HashTable` behind a `parking_lot::RwLock`
pub struct SharedHashTable<V, H = HashFunction> {
    inner: RwLock<HashTable<V, H>>,
}

impl<V, H> SharedHashTable<V, H>
where
    H: KeyHasher,
{
    /// Create a new shared table; see [`HashTable::new`] for capacity rules
    pub fn new(capacity: usize, hasher: H) -> Self {
        Self::from_table(HashTable::new(capacity, hasher))
    }

    /// Wrap an existing table
    pub fn from_table(table: HashTable<V, H>) -> Self {
        SharedHashTable {
            inner: RwLock::new(table),
        }
    }

    /// Acquire a read lock over the whole table
    pub fn read(&self) -> RwLockReadGuard<'_, HashTable<V, H>> {
        self.inner.read()
    }

    /// Acquire a write lock over the whole table
    pub fn write(&self) -> RwLockWriteGuard<'_, HashTable<V, H>> {
        self.inner.write()
    }

    pub fn put(&self, key: impl Into<String>, value: V) {
        self.inner.write().put(key, value);
    }

    /// Clone of the value stored under `key`
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.inner.write().remove(key)
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Unwrap the table, consuming the lock
    pub fn into_inner(self) -> HashTable<V, H> {
        self.inner.into_inner()
    }
}

impl<V> Default for SharedHashTable<V, HashFunction> {
    fn default() -> Self {
        Self::from_table(HashTable::default())
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
