//! Missing-value classification.
//!
//! The sentinel set is fixed: the absent marker, the empty string, and the
//! case-insensitive words `nan` and `none`. A NaN float counts as missing
//! because its textual form is `nan`.

use crate::value::Value;

/// Classifies an element as missing or present.
pub trait MaybeMissing {
    /// Returns true if the element belongs to the missing-value sentinel set.
    fn is_missing(&self) -> bool;
}

/// Returns true for empty text and for `nan` / `none` in any casing.
pub fn is_missing_text(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("nan") || value.eq_ignore_ascii_case("none")
}

impl MaybeMissing for Value {
    fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(_) | Value::Int(_) | Value::List(_) => false,
            Value::Float(v) => v.is_nan(),
            Value::Text(s) => is_missing_text(s),
        }
    }
}

impl MaybeMissing for str {
    fn is_missing(&self) -> bool {
        is_missing_text(self)
    }
}

impl MaybeMissing for String {
    fn is_missing(&self) -> bool {
        is_missing_text(self)
    }
}

impl MaybeMissing for f64 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }
}

impl<T: MaybeMissing + ?Sized> MaybeMissing for &T {
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }
}

impl<T: MaybeMissing> MaybeMissing for Option<T> {
    fn is_missing(&self) -> bool {
        self.as_ref().is_none_or(MaybeMissing::is_missing)
    }
}
