use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

// Import the hash functions from the main crate
use chainstore::infrastructure::hash::{
    additive_hash, crc32_hash, fnv1a_hash, weighted_hash, xxh64_hash,
};

// Generate a random string of specified length
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let mut s = String::with_capacity(length);

    for _ in 0..length {
        let idx = rng.gen_range(0..CHARSET.len());
        s.push(CHARSET[idx] as char);
    }

    s
}

fn bench_strings_of_length(c: &mut Criterion, group_name: &str, length: usize) {
    let s = generate_random_string(length);

    let mut group = c.benchmark_group(group_name);

    group.bench_function("additive_hash", |b| b.iter(|| additive_hash(black_box(&s))));
    group.bench_function("weighted_hash", |b| b.iter(|| weighted_hash(black_box(&s))));
    group.bench_function("fnv1a_hash", |b| b.iter(|| fnv1a_hash(black_box(&s))));
    group.bench_function("xxh64_hash", |b| b.iter(|| xxh64_hash(black_box(&s))));
    group.bench_function("crc32_hash", |b| b.iter(|| crc32_hash(black_box(&s))));

    group.finish();
}

pub fn bench_short_strings(c: &mut Criterion) {
    bench_strings_of_length(c, "ShortStrings", 10);
}

pub fn bench_medium_strings(c: &mut Criterion) {
    bench_strings_of_length(c, "MediumStrings", 100);
}

pub fn bench_long_strings(c: &mut Criterion) {
    bench_strings_of_length(c, "LongStrings", 1000);
}

// Keys shaped like the ones the demo and load generator use ("key123")
pub fn bench_formatted_keys(c: &mut Criterion) {
    let keys: Vec<String> = (0..1000).map(|i| format!("key{}", i)).collect();

    let mut group = c.benchmark_group("FormattedKeys");

    group.bench_function("additive_hash", |b| {
        b.iter(|| keys.iter().map(|k| additive_hash(k)).fold(0u64, u64::wrapping_add))
    });
    group.bench_function("weighted_hash", |b| {
        b.iter(|| keys.iter().map(|k| weighted_hash(k)).fold(0u64, u64::wrapping_add))
    });
    group.bench_function("xxh64_hash", |b| {
        b.iter(|| keys.iter().map(|k| xxh64_hash(k)).fold(0u64, u64::wrapping_add))
    });

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(
    benches,
    bench_short_strings,
    bench_medium_strings,
    bench_long_strings,
    bench_formatted_keys
);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
