// Hash table implementation with separate chaining
//
// Capacity policy: bucket counts are always prime. A requested capacity that
// is not prime is rounded up without complaint, and a resize to zero buckets
// is ignored. Neither case is reported as an error.

use crate::config::HashTableConfig;
use crate::infrastructure::chain::Chain;
use crate::infrastructure::hash::{HashFunction, KeyHasher};
use crate::infrastructure::prime::{is_prime, next_prime};
use log::{debug, trace};
use std::fmt;

/// Bucket count used by [`HashTable::default`]
pub const DEFAULT_CAPACITY: usize = 11;

/// Load factor at which `put` doubles the bucket count before inserting
pub const MAX_LOAD_FACTOR: f64 = 1.0;

/// Hash table keyed by strings, resolving collisions with per-bucket chains
pub struct HashTable<V, H = HashFunction> {
    /// One chain per bucket; `buckets.len() == capacity`
    buckets: Vec<Chain<V>>,
    /// Number of buckets, always prime
    capacity: usize,
    /// Number of distinct keys stored across all chains
    size: usize,
    /// Hash function fixed at construction
    hasher: H,
}

impl<V, H> HashTable<V, H>
where
    H: KeyHasher,
{
    /// Create a new hash table.
    ///
    /// `capacity` is adjusted to the next prime (an even request is made odd
    /// first, so `new(2, ..)` yields 3 buckets).
    pub fn new(capacity: usize, hasher: H) -> Self {
        let resolved = next_prime(capacity);
        if resolved != capacity {
            trace!("capacity {} is not prime, using {}", capacity, resolved);
        }
        debug!("creating hash table with {} buckets", resolved);

        HashTable {
            buckets: Self::allocate_buckets(resolved),
            capacity: resolved,
            size: 0,
            hasher,
        }
    }

    fn allocate_buckets(capacity: usize) -> Vec<Chain<V>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::new);
        buckets
    }

    /// Calculate the bucket index for a given key
    fn bucket_index(&self, key: &str) -> usize {
        (self.hasher.hash_key(key) % self.capacity as u64) as usize
    }

    /// Insert or overwrite the value for `key`.
    ///
    /// If the table is already at the maximum load factor it is resized to
    /// twice its capacity first.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        if self.table_load() >= MAX_LOAD_FACTOR {
            self.resize_table(self.capacity * 2);
        }

        let key = key.into();
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        match bucket.find_mut(&key) {
            Some(node) => *node.value_mut() = value,
            None => {
                bucket.insert(key, value);
                self.size += 1;
            }
        }
    }

    /// Get the value associated with a key
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index].find(key).map(|node| node.value())
    }

    /// Get a mutable reference to the value associated with a key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index].find_mut(key).map(|node| node.value_mut())
    }

    /// Check whether `key` is stored in the table
    pub fn contains_key(&self, key: &str) -> bool {
        let index = self.bucket_index(key);
        self.buckets[index].contains(key)
    }

    /// Remove a key and return its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let removed = self.buckets[index].remove(key);

        if removed.is_some() {
            self.size -= 1;
        }

        removed
    }

    /// Number of buckets whose chain is empty
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// Current load factor, `size / capacity`
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Drop every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = Chain::new();
        }
        self.size = 0;
    }

    /// Change the bucket count and rehash every entry.
    ///
    /// A request of `0` is ignored. A non-prime request is rounded up to the
    /// next prime; a prime request (including 2) is used as is. Entries are
    /// re-inserted through [`HashTable::put`], so the table may grow again
    /// while rehashing if the new capacity is smaller than the entry count.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            trace!("ignoring resize to {} buckets", new_capacity);
            return;
        }

        let new_capacity = if is_prime(new_capacity) {
            new_capacity
        } else {
            next_prime(new_capacity)
        };

        debug!(
            "resizing hash table from {} to {} buckets ({} entries)",
            self.capacity, new_capacity, self.size
        );

        let old_buckets =
            std::mem::replace(&mut self.buckets, Self::allocate_buckets(new_capacity));
        let pending: Vec<(String, V)> = old_buckets.into_iter().flatten().collect();

        self.size = 0;
        self.capacity = new_capacity;

        for (key, value) in pending {
            self.put(key, value);
        }
    }

    /// Iterate over entries in bucket order, then chain order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    /// Iterate over keys in the same order as [`HashTable::iter`]
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Snapshot of every key/value pair, in the same order as [`HashTable::iter`]
    pub fn entries(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Get the number of elements in the hash table
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the number of buckets
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the hash table is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The hash function this table was built with
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<V> HashTable<V, HashFunction> {
    /// Build a table from construction options
    pub fn with_config(config: &HashTableConfig) -> Self {
        Self::new(config.initial_capacity, config.hash_function)
    }
}

impl<V> Default for HashTable<V, HashFunction> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, HashFunction::default())
    }
}

impl<V: fmt::Debug, H: KeyHasher> fmt::Debug for HashTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// One line per bucket: `index: [(key: value) -> ...]`
impl<V: fmt::Display, H> fmt::Display for HashTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "{}: {}", index, bucket)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
