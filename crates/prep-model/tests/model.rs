//! Tests for prep-model types.

use prep_model::{MaybeMissing, Value};

#[test]
fn text_sentinels_are_missing_in_any_case() {
    for text in ["", "nan", "NaN", "NAN", "none", "None", "NONE"] {
        assert!(Value::from(text).is_missing(), "{text:?} should be missing");
    }
}

#[test]
fn ordinary_text_is_present() {
    for text in ["0", " ", "null", "nana", "n/a", "nonE1"] {
        assert!(!Value::from(text).is_missing(), "{text:?} should be present");
    }
}

#[test]
fn missingness_per_variant() {
    assert!(Value::Null.is_missing());
    assert!(Value::Float(f64::NAN).is_missing());
    assert!(!Value::Float(0.0).is_missing());
    assert!(!Value::Int(0).is_missing());
}

#[test]
fn option_none_is_missing() {
    assert!(None::<&str>.is_missing());
    assert!(Some("").is_missing());
    assert!(!Some("x").is_missing());
    assert_eq!(Value::from(None::<i64>), Value::Null);
}

#[test]
fn display_matches_list_rendering() {
    assert_eq!(Value::from("1").to_string(), "'1'");
    assert_eq!(Value::Float(999.0).to_string(), "999.0");
    assert_eq!(Value::Float(0.25).to_string(), "0.25");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Null.to_string(), "None");
}

#[test]
fn serializes_untagged() {
    let values = vec![Value::Null, Value::Int(1), Value::Float(2.5), Value::from("a")];
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, r#"[null,1,2.5,"a"]"#);
}

#[test]
fn deserializes_integers_before_floats() {
    let values: Vec<Value> = serde_json::from_str(r#"[1, 2.5, "x", null]"#).unwrap();
    assert_eq!(
        values,
        vec![Value::Int(1), Value::Float(2.5), Value::from("x"), Value::Null]
    );
}

#[test]
fn display_uses_signed_exponents_outside_positional_range() {
    assert_eq!(Value::Float(1e-5).to_string(), "1e-05");
    assert_eq!(Value::Float(1e16).to_string(), "1e+16");
    assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
}

#[test]
fn nested_lists_and_booleans_round_trip_through_json() {
    let values: Vec<Value> = serde_json::from_str("[[1, 2], true, []]").unwrap();
    assert_eq!(
        values,
        vec![
            Value::List(vec![Value::Int(1), Value::Int(2)]),
            Value::Bool(true),
            Value::List(Vec::new()),
        ]
    );
    assert_eq!(serde_json::to_string(&values).unwrap(), "[[1,2],true,[]]");
    assert_eq!(values[0].to_string(), "[1, 2]");
    assert!(!values[2].is_missing());
}
