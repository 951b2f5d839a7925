use super::*;
use std::sync::Arc;
use std::thread;

const THREAD_COUNT: usize = 8;
const OPERATIONS_PER_THREAD: usize = 1_000;

#[test]
fn test_shared_basic() {
    let table = SharedHashTable::new(11, HashFunction::Weighted);

    table.put("a", 1);
    table.put("b", 2);
    assert_eq!(table.get("a"), Some(1));
    assert!(table.contains_key("b"));
    assert_eq!(table.size(), 2);

    assert_eq!(table.remove("a"), Some(1));
    assert_eq!(table.remove("a"), None);
    assert_eq!(table.get("a"), None);

    // Guards expose the full table API
    table.write().resize_table(30);
    assert_eq!(table.read().capacity(), 31);
    assert_eq!(table.capacity(), 31);

    let inner = table.into_inner();
    assert_eq!(inner.get("b"), Some(&2));
}

#[test]
fn test_shared_concurrent_insertions() {
    let table: Arc<SharedHashTable<usize>> = Arc::new(SharedHashTable::default());

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for i in 0..OPERATIONS_PER_THREAD {
                    let key = thread_id * OPERATIONS_PER_THREAD + i;
                    table.put(key.to_string(), key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let total = THREAD_COUNT * OPERATIONS_PER_THREAD;
    assert_eq!(table.size(), total);
    assert!(table.read().table_load() <= 1.0);
    for key in (0..total).step_by(97) {
        assert_eq!(table.get(&key.to_string()), Some(key));
    }
}

#[test]
fn test_shared_concurrent_mixed() {
    let table = Arc::new(SharedHashTable::new(53, HashFunction::Xxh64));
    for i in 0..OPERATIONS_PER_THREAD {
        table.put(format!("key{}", i), i);
    }

    // Even threads remove their own slice, odd threads only read
    let handles: Vec<_> = (0..4)
        .map(|thread_id| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let slice = OPERATIONS_PER_THREAD / 4;
                for i in thread_id * slice..(thread_id + 1) * slice {
                    let key = format!("key{}", i);
                    if thread_id % 2 == 0 {
                        assert_eq!(table.remove(&key), Some(i));
                    } else {
                        assert_eq!(table.get(&key), Some(i));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(table.size(), OPERATIONS_PER_THREAD / 2);
}
