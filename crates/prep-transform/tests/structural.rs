//! Tests for flatten and shuffle.

use prep_transform::{flatten, shuffle};

#[test]
fn flatten_one_level() {
    let nested = vec![vec![1, 2], vec![3, 4], vec![5]];
    assert_eq!(flatten(nested), vec![1, 2, 3, 4, 5]);
}

#[test]
fn flatten_skips_empty_inner() {
    let nested: Vec<Vec<&str>> = vec![vec![], vec!["a"], vec![], vec!["b", "c"]];
    assert_eq!(flatten(nested), vec!["a", "b", "c"]);
}

#[test]
fn flatten_only_one_level() {
    let nested = vec![vec![vec![1], vec![2]], vec![vec![3]]];
    assert_eq!(flatten(nested), vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn shuffle_same_seed_same_order() {
    let values = vec![1, 2, 3, 4, 5];
    let first = shuffle(&values, Some(42));
    let second = shuffle(&values, Some(42));
    assert_eq!(first, second);
}

#[test]
fn shuffle_is_a_permutation() {
    let values = vec![1, 2, 3, 4, 5];
    let mut shuffled = shuffle(&values, Some(42));
    assert_eq!(shuffled.len(), values.len());
    shuffled.sort_unstable();
    assert_eq!(shuffled, values);
}

#[test]
fn shuffle_leaves_input_untouched() {
    let values = vec!["a", "b", "c", "d"];
    let _ = shuffle(&values, None);
    let _ = shuffle(&values, Some(7));
    assert_eq!(values, vec!["a", "b", "c", "d"]);
}

#[test]
fn shuffle_unseeded_is_a_permutation() {
    let values: Vec<u32> = (0..32).collect();
    let mut shuffled = shuffle(&values, None);
    shuffled.sort_unstable();
    assert_eq!(shuffled, values);
}

#[test]
fn shuffle_seeds_are_independent_of_call_order() {
    let values: Vec<u32> = (0..16).collect();
    let before = shuffle(&values, Some(1));
    let _ = shuffle(&values, Some(2));
    let _ = shuffle(&values, None);
    assert_eq!(shuffle(&values, Some(1)), before);
}
