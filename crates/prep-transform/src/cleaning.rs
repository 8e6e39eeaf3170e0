//! Missing-value and duplicate cleaning.

use std::collections::HashSet;
use std::hash::Hash;

use prep_model::MaybeMissing;
use tracing::debug;

/// Returns the elements that are not missing, in their original order.
///
/// Present elements pass through unchanged; no type coercion happens.
pub fn remove_missing<T>(values: &[T]) -> Vec<T>
where
    T: MaybeMissing + Clone,
{
    let kept: Vec<T> = values.iter().filter(|v| !v.is_missing()).cloned().collect();
    debug!(
        kept = kept.len(),
        removed = values.len() - kept.len(),
        "removed missing values"
    );
    kept
}

/// Replaces every missing element with `fill_value`.
///
/// Length and order are preserved.
pub fn fill_missing<T>(values: &[T], fill_value: &T) -> Vec<T>
where
    T: MaybeMissing + Clone,
{
    values
        .iter()
        .map(|v| {
            if v.is_missing() {
                fill_value.clone()
            } else {
                v.clone()
            }
        })
        .collect()
}

/// Drops later duplicates, keeping elements in first-occurrence order.
pub fn remove_duplicates<T>(values: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(values.len());
    let unique: Vec<T> = values
        .iter()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect();
    debug!(
        unique = unique.len(),
        duplicates = values.len() - unique.len(),
        "removed duplicates"
    );
    unique
}
