//! Numeric scaling and coercion.
//!
//! Scaling operations (`normalize`, `standardize`, `clip`) work on uniformly
//! numeric input; callers holding raw text go through [`parse_numbers`] first,
//! which fails on the first bad element. The coercion operations
//! (`to_integers`, `log_transform`) instead skip elements they cannot handle.

use prep_model::Value;
use tracing::debug;

use crate::error::{Result, TransformError};

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses every element as f64.
///
/// # Errors
///
/// Returns [`TransformError::InvalidNumber`] for the first element that does
/// not parse.
pub fn parse_numbers<S: AsRef<str>>(values: &[S]) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            parse_f64(raw).ok_or_else(|| TransformError::InvalidNumber {
                index,
                value: raw.to_string(),
            })
        })
        .collect()
}

/// Min-max rescale into `[new_min, new_max]`.
///
/// A constant input maps every element to `new_min`.
pub fn normalize(values: &[f64], new_min: f64, new_max: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![new_min; values.len()];
    }
    // Divide last so the maximum lands exactly on new_max.
    values
        .iter()
        .map(|v| new_min + (v - min) * (new_max - new_min) / (max - min))
        .collect()
}

/// Z-score standardization using the population standard deviation.
///
/// A zero deviation maps every element to `0.0`.
pub fn standardize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    let std = variance.sqrt();
    if std == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - mean) / std).collect()
}

/// Clamps every element to `[min_val, max_val]`.
///
/// The upper bound is applied first, so an inverted range yields `min_val`
/// everywhere. NaN elements also become `min_val`.
pub fn clip(values: &[f64], min_val: f64, max_val: f64) -> Vec<f64> {
    values
        .iter()
        .map(|v| {
            if v.is_nan() {
                min_val
            } else {
                v.min(max_val).max(min_val)
            }
        })
        .collect()
}

fn truncate_to_i64(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive bound.
    let truncated = value.trunc();
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

/// Parses each string as a float and truncates it toward zero.
///
/// Elements that do not parse, or that have no integer counterpart
/// (infinities, NaN, out of range), are dropped.
pub fn to_integers<S: AsRef<str>>(values: &[S]) -> Vec<i64> {
    let integers: Vec<i64> = values
        .iter()
        .filter_map(|v| parse_f64(v.as_ref()).and_then(truncate_to_i64))
        .collect();
    debug!(
        converted = integers.len(),
        skipped = values.len() - integers.len(),
        "converted to integers"
    );
    integers
}

/// [`to_integers`] over mixed elements: null and nested lists are dropped,
/// booleans become 0 or 1, numbers are truncated, text is parsed.
pub fn values_to_integers(values: &[Value]) -> Vec<i64> {
    values
        .iter()
        .filter_map(|v| match v {
            Value::Null | Value::List(_) => None,
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Int(i) => Some(*i),
            Value::Float(f) => truncate_to_i64(*f),
            Value::Text(s) => parse_f64(s).and_then(truncate_to_i64),
        })
        .collect()
}

/// Natural logarithm of the strictly positive elements.
///
/// Zero, negative and NaN elements are dropped, so the output can be
/// shorter than the input.
pub fn log_transform(values: &[f64]) -> Vec<f64> {
    let logs: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v > 0.0)
        .map(f64::ln)
        .collect();
    debug!(
        transformed = logs.len(),
        skipped = values.len() - logs.len(),
        "applied log transform"
    );
    logs
}
