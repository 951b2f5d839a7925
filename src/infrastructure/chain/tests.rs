use super::*;

fn chain_of(entries: &[(&str, i32)]) -> Chain<i32> {
    let mut chain = Chain::new();
    for (key, value) in entries {
        chain.insert(key.to_string(), *value);
    }
    chain
}

#[test]
fn test_chain_empty() {
    let mut chain: Chain<i32> = Chain::new();

    assert!(chain.is_empty());
    assert_eq!(chain.len(), 0);
    assert!(chain.find("a").is_none());
    assert!(!chain.contains("a"));
    assert_eq!(chain.remove("a"), None);
    assert_eq!(chain.pop_front(), None);
    assert_eq!(chain.iter().count(), 0);
}

#[test]
fn test_chain_insert_is_newest_first() {
    let chain = chain_of(&[("a", 1), ("b", 2), ("c", 3)]);

    assert_eq!(chain.len(), 3);
    let keys: Vec<&str> = chain.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["c", "b", "a"]);
}

#[test]
fn test_chain_find_and_update() {
    let mut chain = chain_of(&[("a", 1), ("b", 2)]);

    let node = chain.find("a").unwrap();
    assert_eq!(node.key(), "a");
    assert_eq!(*node.value(), 1);

    *chain.find_mut("a").unwrap().value_mut() = 10;
    assert_eq!(*chain.find("a").unwrap().value(), 10);
    assert_eq!(chain.len(), 2);
}

#[test]
fn test_chain_remove_head_middle_tail() {
    // Chain order is e, d, c, b, a
    let mut chain = chain_of(&[("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);

    assert_eq!(chain.remove("e"), Some(5));
    assert_eq!(chain.remove("c"), Some(3));
    assert_eq!(chain.remove("a"), Some(1));
    assert_eq!(chain.remove("a"), None);
    assert_eq!(chain.remove("missing"), None);

    assert_eq!(chain.len(), 2);
    let remaining: Vec<(&str, &i32)> = chain.iter().collect();
    assert_eq!(remaining, vec![("d", &4), ("b", &2)]);
}

#[test]
fn test_chain_into_iter_drains_in_order() {
    let chain = chain_of(&[("x", 1), ("y", 2)]);

    let drained: Vec<(String, i32)> = chain.into_iter().collect();
    assert_eq!(drained, vec![("y".to_string(), 2), ("x".to_string(), 1)]);
}

#[test]
fn test_chain_display() {
    let empty: Chain<i32> = Chain::new();
    assert_eq!(empty.to_string(), "[]");

    let chain = chain_of(&[("key1", 10), ("key2", 20)]);
    assert_eq!(chain.to_string(), "[(key2: 20) -> (key1: 10)]");
}

#[test]
fn test_chain_long_drop() {
    // Dropping must not recurse once per node
    let mut chain = Chain::new();
    for i in 0..200_000 {
        chain.insert(i.to_string(), i);
    }
    assert_eq!(chain.len(), 200_000);
    drop(chain);
}
