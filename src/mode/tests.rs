use super::*;

fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}

#[test]
fn test_find_mode_single_winner() {
    let mode = find_mode(&["apple", "apple", "grape", "melon", "peach"]).unwrap();

    assert_eq!(mode.values, vec!["apple".to_string()]);
    assert_eq!(mode.frequency, 2);
}

#[test]
fn test_find_mode_two_way_tie() {
    let items = [
        "Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu",
    ];
    let mode = find_mode(&items).unwrap();

    assert_eq!(mode.frequency, 3);
    assert_eq!(sorted(mode.values), vec!["Mint", "Ubuntu"]);
}

#[test]
fn test_find_mode_all_distinct() {
    let mode = find_mode(&["one", "two", "three", "four", "five"]).unwrap();

    assert_eq!(mode.frequency, 1);
    assert_eq!(
        sorted(mode.values),
        vec!["five", "four", "one", "three", "two"]
    );
}

#[test]
fn test_find_mode_three_way_tie() {
    let items = [
        "2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2",
    ];
    let mode = find_mode(&items).unwrap();

    assert_eq!(mode.frequency, 3);
    assert_eq!(sorted(mode.values), vec!["2", "3", "4"]);
}

#[test]
fn test_find_mode_single_item() {
    let mode = find_mode(&["solo"]).unwrap();
    assert_eq!(mode.values, vec!["solo".to_string()]);
    assert_eq!(mode.frequency, 1);
}

#[test]
fn test_find_mode_owned_strings() {
    // Enough distinct values to force the tally table past its first resize
    let items: Vec<String> = (0..100).map(|i| format!("v{}", i % 40)).collect();
    let mode = find_mode(&items).unwrap();

    // v0..v19 appear three times, v20..v39 twice
    assert_eq!(mode.frequency, 3);
    assert_eq!(mode.values.len(), 20);
    assert!(mode.values.contains(&"v0".to_string()));
    assert!(!mode.values.contains(&"v20".to_string()));
}

#[test]
fn test_find_mode_empty_input() {
    let items: [&str; 0] = [];
    assert_eq!(find_mode(&items), Err(ModeError::EmptyInput));
    assert_eq!(
        ModeError::EmptyInput.to_string(),
        "Invalid argument: mode of an empty sequence is undefined"
    );
}
