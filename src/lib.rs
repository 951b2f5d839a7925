//! Chainstore: a string-keyed hash table with separate chaining

// Import various modules
pub mod config;
pub mod infrastructure;
pub mod logger;
pub mod mode;

// Re-export the main types for easier access
pub use config::{ConfigError, ConfigResult, HashTableConfig};
pub use infrastructure::hash::{HashFunction, KeyHasher};
pub use infrastructure::hash_table::HashTable;
pub use infrastructure::shared::SharedHashTable;
pub use mode::{Mode, ModeError, ModeResult, find_mode};
