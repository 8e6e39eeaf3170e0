//! Heterogeneous sequence elements.
//!
//! Command-line input arrives as text, numeric operations produce floats and
//! structural operations pass whatever they receive through untouched,
//! nested lists included. [`Value`] is the tagged union that carries all of
//! these through one sequence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single element of a preprocessing sequence.
///
/// Floats compare and hash by bit pattern after folding `-0.0` into `0.0`
/// and every NaN into one canonical NaN, so `Value` is usable as a set key.
/// `Int(1)` and `Float(1.0)` are distinct values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent element.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integral number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Raw text.
    Text(String),
    /// Nested sequence.
    List(Vec<Value>),
}

impl Value {
    fn float_key(v: f64) -> u64 {
        if v.is_nan() {
            f64::NAN.to_bits()
        } else if v == 0.0 {
            0.0f64.to_bits()
        } else {
            v.to_bits()
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => Value::float_key(*a) == Value::float_key(*b),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(v) => v.hash(state),
            Value::Int(v) => v.hash(state),
            Value::Float(v) => Value::float_key(*v).hash(state),
            Value::Text(s) => s.hash(state),
            Value::List(items) => items.hash(state),
        }
    }
}

/// Shortest round-trip form of a float.
///
/// Finite values between 1e-4 and 1e16 print in positional notation with
/// at least one fractional digit. Values outside that range use an
/// exponent with an explicit sign and at least two digits (`1e-05`,
/// `1.5e+16`). Non-finite values print as `nan`, `inf` and `-inf`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let abs = v.abs();
    if abs == 0.0 || (1e-4..1e16).contains(&abs) {
        return format!("{v:?}");
    }
    let exponential = format!("{v:e}");
    let (mantissa, exponent) = exponential
        .split_once('e')
        .unwrap_or((exponential.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Renders the element the way it appears inside a printed list:
/// text is single-quoted, floats follow [`format_float`], booleans print
/// as `True` / `False`, null as `None` and nested lists bracketed.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{}", format_float(*v)),
            Value::Text(s) => write!(f, "'{s}'"),
            Value::List(items) => {
                write!(f, "[")?;
                for (pos, item) in items.iter().enumerate() {
                    if pos > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
