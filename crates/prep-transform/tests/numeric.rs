//! Tests for numeric scaling and coercion.

use std::f64::consts::E;

use prep_model::Value;
use prep_transform::{
    TransformError, clip, log_transform, normalize, parse_numbers, standardize, to_integers,
    values_to_integers,
};

fn sample() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 4.0, 5.0]
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}

#[test]
fn normalize_default_range() {
    assert_eq!(normalize(&sample(), 0.0, 1.0), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn normalize_custom_range() {
    assert_close(&normalize(&[0.0, 5.0, 10.0], -1.0, 1.0), &[-1.0, 0.0, 1.0]);
}

#[test]
fn normalize_inverted_range() {
    assert_close(&normalize(&[0.0, 5.0, 10.0], 1.0, 0.0), &[1.0, 0.5, 0.0]);
}

#[test]
fn normalize_maximum_lands_exactly_on_new_max() {
    assert_eq!(normalize(&[0.0, 49.0], 0.0, 1.0), vec![0.0, 1.0]);
}

#[test]
fn normalize_degenerate_inputs() {
    assert!(normalize(&[], 0.0, 1.0).is_empty());
    assert_eq!(normalize(&[7.0, 7.0, 7.0], 2.0, 9.0), vec![2.0, 2.0, 2.0]);
}

#[test]
fn standardize_uses_population_std() {
    let std = 2.0_f64.sqrt();
    let expected: Vec<f64> = sample().iter().map(|v| (v - 3.0) / std).collect();
    assert_close(&standardize(&sample()), &expected);
}

#[test]
fn standardize_degenerate_inputs() {
    assert!(standardize(&[]).is_empty());
    assert_eq!(standardize(&[4.0, 4.0]), vec![0.0, 0.0]);
}

#[test]
fn clip_clamps_both_ends() {
    assert_eq!(clip(&sample(), 2.0, 4.0), vec![2.0, 2.0, 3.0, 4.0, 4.0]);
}

#[test]
fn clip_maps_nan_to_min() {
    assert_eq!(clip(&[f64::NAN, 0.5], 0.0, 1.0), vec![0.0, 0.5]);
}

#[test]
fn clip_inverted_bounds_yield_min() {
    assert_eq!(clip(&[0.0, 5.0, 10.0], 6.0, 4.0), vec![6.0, 6.0, 6.0]);
}

#[test]
fn to_integers_truncates_and_skips() {
    assert_eq!(to_integers(&["1", "2.5", "abc", "3", "4.0"]), vec![1, 2, 3, 4]);
}

#[test]
fn to_integers_truncates_toward_zero() {
    assert_eq!(to_integers(&["-2.7", " 8.9 ", "1e3"]), vec![-2, 8, 1000]);
}

#[test]
fn to_integers_skips_non_finite() {
    assert_eq!(to_integers(&["inf", "nan", "", "7"]), vec![7]);
}

#[test]
fn values_to_integers_drops_null() {
    let values = vec![
        Value::from("1.5"),
        Value::Null,
        Value::Float(-3.9),
        Value::Int(4),
        Value::from("x"),
    ];
    assert_eq!(values_to_integers(&values), vec![1, -3, 4]);
}

#[test]
fn log_transform_natural_log() {
    assert_close(&log_transform(&[1.0, E, E * E]), &[0.0, 1.0, 2.0]);
}

#[test]
fn log_transform_drops_non_positive() {
    let logs = log_transform(&[-1.0, 0.0, 1.0, f64::NAN, 10.0]);
    assert_close(&logs, &[0.0, 10.0_f64.ln()]);
}

#[test]
fn parse_numbers_accepts_signed_values() {
    assert_eq!(parse_numbers(&["1", "-2.5", " 3 "]).unwrap(), vec![1.0, -2.5, 3.0]);
}

#[test]
fn parse_numbers_fails_fast() {
    let err = parse_numbers(&["1", "two", "x"]).unwrap_err();
    let TransformError::InvalidNumber { index, value } = &err;
    assert_eq!(*index, 1);
    assert_eq!(value, "two");
    assert!(err.to_string().contains("position 1"));
}

#[test]
fn values_to_integers_maps_booleans_and_skips_lists() {
    let values = vec![
        Value::Bool(true),
        Value::Bool(false),
        Value::List(vec![Value::Int(1)]),
    ];
    assert_eq!(values_to_integers(&values), vec![1, 0]);
}
