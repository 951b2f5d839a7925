//! Building blocks of the hash table: hash functions, prime selection,
//! bucket chains, the table itself and its locked wrapper.

pub mod chain;
pub mod hash;
pub mod hash_table;
pub mod prime;
pub mod shared;
