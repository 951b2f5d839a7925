use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Import the hash table and hash functions from the crate
use chainstore::infrastructure::hash::HashFunction;
use chainstore::infrastructure::hash_table::{DEFAULT_CAPACITY, HashTable};

// Test configuration
const OPERATIONS: usize = 10_000;

fn keys() -> Vec<String> {
    (0..OPERATIONS).map(|i| format!("key{}", i)).collect()
}

fn populated(function: HashFunction, keys: &[String]) -> HashTable<usize> {
    let mut table = HashTable::new(DEFAULT_CAPACITY, function);
    for (i, key) in keys.iter().enumerate() {
        table.put(key.as_str(), i);
    }
    table
}

// Inserting from the default capacity exercises every doubling resize
pub fn bench_insertions(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("Insertions");

    for function in HashFunction::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(function), &function, |b, &function| {
            b.iter(|| populated(function, black_box(&keys)));
        });
    }

    group.finish();
}

pub fn bench_lookups(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("Lookups");

    for function in HashFunction::ALL {
        let table = populated(function, &keys);
        group.bench_with_input(BenchmarkId::from_parameter(function), &table, |b, table| {
            b.iter(|| {
                for key in &keys {
                    assert!(table.get(black_box(key)).is_some());
                }
            });
        });
    }

    group.finish();
}

// 90% reads, 10% overwrites
pub fn bench_read_heavy(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("ReadHeavy");

    for function in HashFunction::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(function), &function, |b, &function| {
            let mut table = populated(function, &keys);
            b.iter(|| {
                for (i, key) in keys.iter().enumerate() {
                    if i % 10 == 0 {
                        table.put(key.as_str(), i + 1);
                    } else {
                        assert!(table.get(key).is_some());
                    }
                }
            });
        });
    }

    group.finish();
}

pub fn bench_removals(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("Removals");

    for function in [HashFunction::Weighted, HashFunction::Xxh64] {
        group.bench_with_input(BenchmarkId::from_parameter(function), &function, |b, &function| {
            b.iter_batched(
                || populated(function, &keys),
                |mut table| {
                    for key in &keys {
                        table.remove(key);
                    }
                    table
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(
    benches,
    bench_insertions,
    bench_lookups,
    bench_read_heavy,
    bench_removals
);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
