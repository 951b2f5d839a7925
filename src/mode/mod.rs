//! Mode finder
//!
//! Counts occurrences of each value with a [`HashTable`] and reports the
//! value(s) that occur most often.

use crate::infrastructure::hash_table::HashTable;
use log::debug;

pub mod error;
pub use error::{ModeError, ModeResult};

/// Most frequent values of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    /// Every value reaching the maximum frequency, in table scan order
    pub values: Vec<String>,
    /// How many times each of `values` occurs
    pub frequency: usize,
}

/// Find the mode(s) of `items` and their frequency.
///
/// Ties are all reported. An empty input is an error rather than an empty
/// result.
///
/// # Examples
///
/// ```
/// use chainstore::find_mode;
///
/// let mode = find_mode(&["apple", "apple", "grape", "melon", "peach"]).unwrap();
/// assert_eq!(mode.values, vec!["apple".to_string()]);
/// assert_eq!(mode.frequency, 2);
/// ```
pub fn find_mode<S: AsRef<str>>(items: &[S]) -> ModeResult<Mode> {
    if items.is_empty() {
        return Err(ModeError::EmptyInput);
    }

    let mut counts: HashTable<usize> = HashTable::default();
    for item in items {
        let item = item.as_ref();
        let count = counts.get(item).copied().unwrap_or(0);
        counts.put(item, count + 1);
    }

    let mut values = Vec::new();
    let mut frequency = 0;
    for (value, &count) in counts.iter() {
        if count > frequency {
            frequency = count;
            values.clear();
            values.push(value.to_string());
        } else if count == frequency {
            values.push(value.to_string());
        }
    }

    debug!(
        "mode of {} items over {} distinct values: {} value(s) at frequency {}",
        items.len(),
        counts.size(),
        values.len(),
        frequency
    );

    Ok(Mode { values, frequency })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
