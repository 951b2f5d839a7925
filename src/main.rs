//! Chainstore demonstration program
//!
//! Walks through every table operation and prints the observable state.
//! Pass a JSON config path as the first argument to override the table used
//! in the final custom-config section.

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use chainstore::logger::initialize_logger;
use chainstore::{HashFunction, HashTable, HashTableConfig, find_mode};
use log::error;
use std::process::ExitCode;

fn section(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "-".repeat(title.len()));
}

fn put_examples() {
    section("put example 1");
    let mut m = HashTable::new(53, HashFunction::Additive);
    for i in 0..150 {
        m.put(format!("str{}", i), i * 100);
        if i % 25 == 24 {
            println!(
                "{} {:.2} {} {}",
                m.empty_buckets(),
                m.table_load(),
                m.size(),
                m.capacity()
            );
        }
    }

    section("put example 2");
    let mut m = HashTable::new(41, HashFunction::Weighted);
    for i in 0..50 {
        m.put(format!("str{}", i / 3), i * 100);
        if i % 10 == 9 {
            println!(
                "{} {:.2} {} {}",
                m.empty_buckets(),
                m.table_load(),
                m.size(),
                m.capacity()
            );
        }
    }
}

fn empty_buckets_and_load_examples() {
    section("empty_buckets example");
    let mut m = HashTable::new(101, HashFunction::Additive);
    println!("{} {} {}", m.empty_buckets(), m.size(), m.capacity());
    for (key, value) in [("key1", 10), ("key2", 20), ("key1", 30), ("key4", 40)] {
        m.put(key, value);
        println!("{} {} {}", m.empty_buckets(), m.size(), m.capacity());
    }

    section("table_load example");
    let mut m = HashTable::new(53, HashFunction::Additive);
    for i in 0..50 {
        m.put(format!("key{}", i), i * 100);
        if i % 10 == 0 {
            println!("{:.2} {} {}", m.table_load(), m.size(), m.capacity());
        }
    }
}

fn clear_and_resize_examples() {
    section("clear example");
    let mut m = HashTable::new(53, HashFunction::Additive);
    m.put("key1", 10);
    m.put("key2", 20);
    println!("{} {}", m.size(), m.capacity());
    m.resize_table(100);
    println!("{} {}", m.size(), m.capacity());
    m.clear();
    println!("{} {}", m.size(), m.capacity());

    section("resize example");
    let mut m = HashTable::new(79, HashFunction::Weighted);
    let keys: Vec<usize> = (1..1000).step_by(13).collect();
    for key in &keys {
        m.put(key.to_string(), key * 42);
    }
    println!("{} {}", m.size(), m.capacity());

    for capacity in (111..1000).step_by(117) {
        m.resize_table(capacity);

        m.put("some key", 0);
        let mut result = m.contains_key("some key");
        m.remove("some key");

        for key in &keys {
            // all inserted keys must be present
            result &= m.contains_key(&key.to_string());
            // keys never inserted must be absent
            result &= !m.contains_key(&(key + 1).to_string());
        }
        println!(
            "{} {} {} {} {:.2}",
            capacity,
            result,
            m.size(),
            m.capacity(),
            m.table_load()
        );
    }
}

fn lookup_examples() {
    section("get example");
    let mut m = HashTable::new(151, HashFunction::Weighted);
    for i in (200..300).step_by(7) {
        m.put(i.to_string(), i * 10);
    }
    println!("{} {}", m.size(), m.capacity());
    for i in (200..300).step_by(21) {
        println!("{} {:?} {}", i, m.get(&i.to_string()), m.get(&i.to_string()) == Some(&(i * 10)));
        println!(
            "{} {:?} {}",
            i + 1,
            m.get(&(i + 1).to_string()),
            m.get(&(i + 1).to_string()) == Some(&((i + 1) * 10))
        );
    }

    section("remove example");
    let mut m = HashTable::new(53, HashFunction::Additive);
    println!("{:?}", m.get("key1"));
    m.put("key1", 10);
    println!("{:?}", m.get("key1"));
    m.remove("key1");
    println!("{:?}", m.get("key1"));
    m.remove("key4");
}

fn entries_example() {
    section("entries example");
    let mut m = HashTable::new(11, HashFunction::Weighted);
    for i in 1..6 {
        m.put(i.to_string(), (i * 10).to_string());
    }
    println!("{:?}", m.entries());

    m.put("20", "200".to_string());
    m.remove("1");
    m.resize_table(2);
    println!("{:?}", m.entries());
    print!("{}", m);
}

fn mode_examples() {
    section("find_mode examples");
    let cases: [&[&str]; 4] = [
        &["apple", "apple", "grape", "melon", "peach"],
        &[
            "Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu",
        ],
        &["one", "two", "three", "four", "five"],
        &[
            "2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2",
        ],
    ];

    for case in cases {
        match find_mode(case) {
            Ok(mode) => println!(
                "Input: {:?}\nMode : {:?}, Frequency: {}\n",
                case, mode.values, mode.frequency
            ),
            Err(err) => error!("find_mode failed: {}", err),
        }
    }
}

fn config_example(path: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    section("custom config");
    let config = match path {
        Some(path) => HashTableConfig::from_file(path)?,
        None => HashTableConfig::default(),
    };
    println!("{}", config.to_json_string()?);

    let mut m = HashTable::with_config(&config);
    for i in 0..20 {
        m.put(format!("key{}", i), i);
    }
    println!(
        "{} {:.2} {} {}",
        m.empty_buckets(),
        m.table_load(),
        m.size(),
        m.capacity()
    );
    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();

    put_examples();
    empty_buckets_and_load_examples();
    clear_and_resize_examples();
    lookup_examples();
    entries_example();
    mode_examples();

    if let Err(err) = config_example(std::env::args().nth(1)) {
        error!("failed to load config: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
