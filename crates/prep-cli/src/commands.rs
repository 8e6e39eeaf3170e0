//! Command implementations.
//!
//! Each function takes raw command-line values, coerces them the way its
//! operation requires, calls one transform and wraps the result for
//! rendering. Positional values of the cleaning and structural commands
//! stay text; numeric commands reject the whole call on the first value
//! that is not a number.

use anyhow::{Context, Result};
use prep_model::Value;
use tracing::{info, warn};

use crate::render::CommandOutput;

fn texts(values: &[String]) -> Vec<Value> {
    values.iter().map(|v| Value::Text(v.clone())).collect()
}

fn numbers(values: &[String]) -> Result<Vec<f64>> {
    prep_transform::parse_numbers(values).context("expected numeric values")
}

pub fn remove_missing(values: &[String]) -> CommandOutput {
    CommandOutput::List(prep_transform::remove_missing(&texts(values)))
}

pub fn fill_missing(values: &[String], fill_value: f64) -> CommandOutput {
    CommandOutput::List(prep_transform::fill_missing(
        &texts(values),
        &Value::Float(fill_value),
    ))
}

pub fn unique(values: &[String]) -> CommandOutput {
    CommandOutput::List(prep_transform::remove_duplicates(&texts(values)))
}

pub fn normalize(values: &[String], new_min: f64, new_max: f64) -> Result<CommandOutput> {
    let values = numbers(values)?;
    Ok(CommandOutput::floats(prep_transform::normalize(
        &values, new_min, new_max,
    )))
}

pub fn standardize(values: &[String]) -> Result<CommandOutput> {
    let values = numbers(values)?;
    Ok(CommandOutput::floats(prep_transform::standardize(&values)))
}

pub fn clip(values: &[String], min_val: f64, max_val: f64) -> Result<CommandOutput> {
    let values = numbers(values)?;
    if min_val > max_val {
        warn!(min_val, max_val, "clip bounds are inverted");
    }
    Ok(CommandOutput::floats(prep_transform::clip(
        &values, min_val, max_val,
    )))
}

pub fn to_integers(values: &[String]) -> CommandOutput {
    CommandOutput::integers(prep_transform::to_integers(values))
}

pub fn log_transform(values: &[String]) -> Result<CommandOutput> {
    let values = numbers(values)?;
    Ok(CommandOutput::floats(prep_transform::log_transform(&values)))
}

pub fn tokenize(text: &str) -> CommandOutput {
    CommandOutput::words(prep_transform::tokenize(text))
}

pub fn remove_punctuation(text: &str) -> CommandOutput {
    CommandOutput::Text(prep_transform::remove_punctuation(text))
}

/// Removes stopwords; `fold_case` lower-cases the list first so matching is
/// case-insensitive on both sides.
pub fn remove_stopwords(text: &str, stopwords: &[String], fold_case: bool) -> CommandOutput {
    let cleaned = if fold_case {
        let folded: Vec<String> = stopwords.iter().map(|w| w.to_lowercase()).collect();
        prep_transform::remove_stopwords(text, &folded)
    } else {
        prep_transform::remove_stopwords(text, stopwords)
    };
    CommandOutput::Text(cleaned)
}

pub fn shuffle(values: &[String], seed: Option<u64>) -> CommandOutput {
    CommandOutput::List(prep_transform::shuffle(&texts(values), seed))
}

/// Flattens bracketed list arguments such as `[1,2]`.
///
/// Each argument is a JSON array; elements may be numbers, strings,
/// booleans, null or nested arrays, and nested arrays stay one element.
/// Arguments that do not start with `[` are ignored. If any bracketed
/// argument fails to parse the result is the empty list.
pub fn flatten(args: &[String]) -> CommandOutput {
    let parsed: Result<Vec<Vec<Value>>, _> = args
        .iter()
        .filter(|arg| arg.starts_with('['))
        .map(|arg| serde_json::from_str::<Vec<Value>>(arg))
        .collect();
    match parsed {
        Ok(lists) => {
            info!(lists = lists.len(), "flattening lists");
            CommandOutput::List(prep_transform::flatten(lists))
        }
        Err(error) => {
            warn!(
                %error,
                "could not parse list argument; lists must be JSON, e.g. [\"a\", true, [1, 2]]"
            );
            CommandOutput::List(Vec::new())
        }
    }
}
