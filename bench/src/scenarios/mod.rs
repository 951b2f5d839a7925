//! Benchmark scenarios module

use chainstore::SharedHashTable;
use rand::Rng;
use rand::rngs::StdRng;
use std::error::Error;
use std::sync::atomic::{AtomicU64, Ordering};

pub type BenchTable = SharedHashTable<i64>;

/// Scenario trait - defines a benchmark scenario
pub trait Scenario: Send + Sync {
    /// Prepare scenario (load the initial keys, etc.)
    fn prepare(&self, table: &BenchTable) -> Result<(), Box<dyn Error>>;

    /// Execute one iteration of the scenario
    fn execute(&self, table: &BenchTable, rng: &mut StdRng) -> Result<(), Box<dyn Error>>;

    /// Get scenario name
    fn name(&self) -> &str;
}

/// Key used for row `id`
pub fn key_for(id: u64) -> String {
    format!("key{}", id)
}

/// Insert keys `1..=keys` with value equal to their id
fn load_keys(table: &BenchTable, keys: usize) {
    let mut guard = table.write();
    for id in 1..=keys as u64 {
        guard.put(key_for(id), id as i64);
    }
}

fn expect_present(table: &BenchTable, key: &str) -> Result<i64, Box<dyn Error>> {
    table
        .get(key)
        .ok_or_else(|| format!("key not found: {}", key).into())
}

/// Point get scenario - single lookup of a loaded key
pub struct PointGet {
    keys: usize,
}

impl PointGet {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for PointGet {
    fn prepare(&self, table: &BenchTable) -> Result<(), Box<dyn Error>> {
        load_keys(table, self.keys);
        Ok(())
    }

    fn execute(&self, table: &BenchTable, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
        let id = rng.gen_range(1..=self.keys as u64);
        expect_present(table, &key_for(id))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "point_get"
    }
}

/// Read write scenario - four lookups and one overwrite
pub struct ReadWrite {
    keys: usize,
}

impl ReadWrite {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for ReadWrite {
    fn prepare(&self, table: &BenchTable) -> Result<(), Box<dyn Error>> {
        load_keys(table, self.keys);
        Ok(())
    }

    fn execute(&self, table: &BenchTable, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
        for _ in 0..4 {
            let id = rng.gen_range(1..=self.keys as u64);
            expect_present(table, &key_for(id))?;
        }
        let id = rng.gen_range(1..=self.keys as u64);
        table.put(key_for(id), rng.r#gen::<i64>());
        Ok(())
    }

    fn name(&self) -> &str {
        "read_write"
    }
}

/// Write only scenario - one new key and one overwrite
pub struct WriteOnly {
    keys: usize,
    next_id: AtomicU64,
}

impl WriteOnly {
    pub fn new(keys: usize) -> Self {
        Self {
            keys,
            next_id: AtomicU64::new((keys + 1) as u64),
        }
    }
}

impl Scenario for WriteOnly {
    fn prepare(&self, table: &BenchTable) -> Result<(), Box<dyn Error>> {
        load_keys(table, self.keys);
        Ok(())
    }

    fn execute(&self, table: &BenchTable, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        table.put(key_for(id), rng.r#gen::<i64>());

        let update_id = rng.gen_range(1..=self.keys as u64);
        if let Some(value) = table.write().get_mut(&key_for(update_id)) {
            *value += 1;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "write_only"
    }
}

/// Insert scenario - single new key per iteration, growing the table
pub struct Insert {
    next_id: AtomicU64,
}

impl Insert {
    pub fn new(keys: usize) -> Self {
        Self {
            next_id: AtomicU64::new((keys + 1) as u64),
        }
    }
}

impl Scenario for Insert {
    fn prepare(&self, _table: &BenchTable) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn execute(&self, table: &BenchTable, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        table.put(key_for(id), rng.r#gen::<i64>());
        Ok(())
    }

    fn name(&self) -> &str {
        "insert"
    }
}

/// Delete scenario - remove a key and put it back, keeping the size steady
pub struct Delete {
    keys: usize,
    next_delete_id: AtomicU64,
}

impl Delete {
    pub fn new(keys: usize) -> Self {
        Self {
            keys,
            next_delete_id: AtomicU64::new(0),
        }
    }
}

impl Scenario for Delete {
    fn prepare(&self, table: &BenchTable) -> Result<(), Box<dyn Error>> {
        load_keys(table, self.keys);
        Ok(())
    }

    fn execute(&self, table: &BenchTable, _rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
        let id = self.next_delete_id.fetch_add(1, Ordering::Relaxed) % self.keys as u64 + 1;
        let key = key_for(id);

        // Hold the lock across both steps so another thread cannot see the gap
        let mut guard = table.write();
        let value = guard
            .remove(&key)
            .ok_or_else(|| format!("key not found: {}", key))?;
        guard.put(key, value);
        Ok(())
    }

    fn name(&self) -> &str {
        "delete"
    }
}

/// Build a scenario by name
pub fn from_name(name: &str, keys: usize) -> Option<Box<dyn Scenario>> {
    let scenario: Box<dyn Scenario> = match name {
        "point_get" => Box::new(PointGet::new(keys)),
        "read_write" => Box::new(ReadWrite::new(keys)),
        "write_only" => Box::new(WriteOnly::new(keys)),
        "insert" => Box::new(Insert::new(keys)),
        "delete" => Box::new(Delete::new(keys)),
        _ => return None,
    };
    Some(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_scenarios_run_against_loaded_table() {
        for name in ["point_get", "read_write", "write_only", "insert", "delete"] {
            let scenario = from_name(name, 100).unwrap();
            assert_eq!(scenario.name(), name);

            let table = BenchTable::default();
            let mut rng = StdRng::seed_from_u64(7);
            scenario.prepare(&table).unwrap();
            for _ in 0..500 {
                scenario.execute(&table, &mut rng).unwrap();
            }
            assert!(table.size() >= 100);
        }
    }

    #[test]
    fn test_unknown_scenario() {
        assert!(from_name("bulk_insert", 10).is_none());
    }
}
