//! Chainstore Benchmark Tool

use chainstore::logger::initialize_logger;
use chainstore::{HashFunction, HashTable, SharedHashTable};
use clap::Parser;
use log::{info, warn};
use rand::SeedableRng;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

mod metrics;
mod scenarios;

use metrics::Metrics;
use scenarios::{BenchTable, Scenario};

fn parse_hash_function(name: &str) -> Result<HashFunction, String> {
    HashFunction::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = HashFunction::ALL.iter().map(|f| f.name()).collect();
        format!("unknown hash function '{}', expected one of {}", name, known.join(", "))
    })
}

#[derive(Parser, Debug, Clone)]
#[command(name = "chainstore-bench")]
#[command(about = "Chainstore hash table load generator")]
struct Args {
    #[arg(short = 't', long, default_value = "1")]
    threads: usize,

    #[arg(short = 'd', long, default_value = "10")]
    duration: u64,

    #[arg(short = 's', long, default_value = "point_get")]
    scenario: String,

    #[arg(long, default_value = "10000", value_parser = clap::value_parser!(u64).range(1..))]
    keys: u64,

    #[arg(long, default_value = "11")]
    capacity: usize,

    #[arg(long, default_value = "additive", value_parser = parse_hash_function)]
    hash: HashFunction,

    #[arg(short = 'w', long, default_value = "0")]
    warmup: u64,

    #[arg(long, default_value = "0")]
    seed: u64,
}

fn run_thread(
    thread_id: usize,
    scenario: Arc<dyn Scenario>,
    table: Arc<BenchTable>,
    stop_flag: Arc<AtomicBool>,
    metrics: Arc<Metrics>,
    seed: u64,
) {
    let seed = seed.wrapping_add(thread_id as u64 * 0x9e3779b97f4a7c15);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    while !stop_flag.load(Ordering::Relaxed) {
        let start = Instant::now();
        let result = scenario.execute(&table, &mut rng);
        let elapsed = start.elapsed().as_nanos() as u64;

        match result {
            Ok(()) => metrics.record_op(elapsed),
            Err(err) => {
                warn!("thread {}: {}", thread_id, err);
                metrics.record_error();
            }
        }
    }
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();

    println!("Chainstore Benchmark Tool");
    println!("=========================");
    println!("Scenario: {}", args.scenario);
    println!("Threads: {}", args.threads);
    println!("Duration: {}s", args.duration);
    println!("Keys: {}", args.keys);
    println!("Initial capacity: {}", args.capacity);
    println!("Hash function: {}", args.hash);
    println!();

    let Some(scenario) = scenarios::from_name(&args.scenario, args.keys as usize) else {
        eprintln!("Unknown scenario: {}", args.scenario);
        return ExitCode::FAILURE;
    };
    let scenario: Arc<dyn Scenario> = Arc::from(scenario);

    println!("Initializing...");
    let table: Arc<BenchTable> = Arc::new(SharedHashTable::from_table(HashTable::new(
        args.capacity,
        args.hash,
    )));
    if let Err(err) = scenario.prepare(&table) {
        eprintln!("Failed to prepare: {}", err);
        return ExitCode::FAILURE;
    }
    info!(
        "loaded {} keys into {} buckets",
        table.size(),
        table.capacity()
    );
    println!("Initialization complete.");

    if args.warmup > 0 {
        println!("Warming up for {}s...", args.warmup);
        std::thread::sleep(Duration::from_secs(args.warmup));
    }

    println!("Running benchmark...");
    let stop_flag = Arc::new(AtomicBool::new(false));
    let metrics = Arc::new(Metrics::new());
    let start_time = Instant::now();

    let handles: Vec<_> = (0..args.threads)
        .map(|i| {
            let scenario = Arc::clone(&scenario);
            let table = Arc::clone(&table);
            let stop = Arc::clone(&stop_flag);
            let metrics = Arc::clone(&metrics);
            let seed = args.seed;
            std::thread::spawn(move || run_thread(i, scenario, table, stop, metrics, seed))
        })
        .collect();

    std::thread::sleep(Duration::from_secs(args.duration));
    stop_flag.store(true, Ordering::Relaxed);

    for handle in handles {
        let _ = handle.join();
    }

    let elapsed = start_time.elapsed();
    let total_ops = metrics.total_ops();
    let ops_per_sec = total_ops as f64 / elapsed.as_secs_f64();

    let guard = table.read();
    println!();
    println!("Operation statistics:");
    println!("    operations:        {:>12} ({:.1} ops/s)", total_ops, ops_per_sec);
    println!(
        "    latency:           {:8.2} us (avg), {:8.2} us (max)",
        metrics.avg_latency_ns() as f64 / 1000.0,
        metrics.max_latency_ns() as f64 / 1000.0
    );
    println!("    errors:            {:>12}", metrics.total_errors());
    println!("Table statistics:");
    println!("    size:              {:>12}", guard.size());
    println!("    capacity:          {:>12}", guard.capacity());
    println!("    empty buckets:     {:>12}", guard.empty_buckets());
    println!("    load factor:       {:>12.2}", guard.table_load());

    ExitCode::SUCCESS
}
