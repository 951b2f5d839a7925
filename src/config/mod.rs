//! Construction options for hash tables
//!
//! Options can be built in code or loaded from JSON:
//!
//! ```json
//! { "initial_capacity": 53, "hash_function": "weighted" }
//! ```
//!
//! Missing fields fall back to [`HashTableConfig::default`].

use crate::infrastructure::hash::HashFunction;
use crate::infrastructure::hash_table::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod error;
pub use error::{ConfigError, ConfigResult};

/// Options used by [`crate::HashTable::with_config`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashTableConfig {
    /// Requested bucket count, rounded up to a prime by the table
    pub initial_capacity: usize,
    /// Hash function the table is built with
    pub hash_function: HashFunction,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            hash_function: HashFunction::default(),
        }
    }
}

impl HashTableConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject options a caller almost certainly did not mean.
    ///
    /// The table itself would round a zero capacity up to 3; a config file
    /// asking for zero buckets is reported instead.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::InvalidArgument(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
