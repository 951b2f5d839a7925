// Hash functions for string keys

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy used by a hash table to turn a key into a bucket selector.
///
/// Any `Fn(&str) -> u64` is a `KeyHasher`, so a plain function or closure
/// can be injected in place of a [`HashFunction`].
pub trait KeyHasher {
    /// Map a key to a non-negative integer. Must be deterministic.
    fn hash_key(&self, key: &str) -> u64;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> u64,
{
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

/// Built-in hash functions selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashFunction {
    /// Sum of character code points
    #[default]
    Additive,
    /// Position-weighted sum of character code points
    Weighted,
    /// FNV-1a 64-bit
    Fnv1a,
    /// xxHash 64-bit with seed 0
    Xxh64,
    /// CRC-32 widened to 64 bits
    Crc32,
}

impl HashFunction {
    /// All built-in functions, in declaration order
    pub const ALL: [HashFunction; 5] = [
        HashFunction::Additive,
        HashFunction::Weighted,
        HashFunction::Fnv1a,
        HashFunction::Xxh64,
        HashFunction::Crc32,
    ];

    /// Short lowercase name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            HashFunction::Additive => "additive",
            HashFunction::Weighted => "weighted",
            HashFunction::Fnv1a => "fnv1a",
            HashFunction::Xxh64 => "xxh64",
            HashFunction::Crc32 => "crc32",
        }
    }

    /// Look a function up by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl KeyHasher for HashFunction {
    fn hash_key(&self, key: &str) -> u64 {
        match self {
            HashFunction::Additive => additive_hash(key),
            HashFunction::Weighted => weighted_hash(key),
            HashFunction::Fnv1a => fnv1a_hash(key),
            HashFunction::Xxh64 => xxh64_hash(key),
            HashFunction::Crc32 => crc32_hash(key),
        }
    }
}

/// Additive hash: the sum of every character's code point.
///
/// Anagrams collide, which makes it a useful stress input for chaining.
pub fn additive_hash(s: &str) -> u64 {
    s.chars().fold(0u64, |hash, c| hash.wrapping_add(c as u64))
}

/// Weighted hash: each character's code point multiplied by its 1-based position
pub fn weighted_hash(s: &str) -> u64 {
    s.chars().enumerate().fold(0u64, |hash, (index, c)| {
        hash.wrapping_add((index as u64 + 1).wrapping_mul(c as u64))
    })
}

/// FNV-1a hash implementation for strings
/// Returns a 64-bit integer hash value
pub fn fnv1a_hash(s: &str) -> u64 {
    // FNV-1a constants
    const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
    const FNV_PRIME: u64 = 1099511628211;

    let mut hash = FNV_OFFSET_BASIS;

    for byte in s.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }

    hash
}

/// xxHash64 of the key's UTF-8 bytes
pub fn xxh64_hash(s: &str) -> u64 {
    xxhash_rust::xxh64::xxh64(s.as_bytes(), 0)
}

/// CRC-32 of the key's UTF-8 bytes
pub fn crc32_hash(s: &str) -> u64 {
    crc32fast::hash(s.as_bytes()) as u64
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
