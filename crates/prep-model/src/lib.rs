//! Element model shared by the prep crates.
//!
//! - **value**: the [`Value`] tagged union (null / int / float / text)
//! - **missing**: the [`MaybeMissing`] trait defining the missing-value sentinel set

pub mod missing;
pub mod value;

pub use missing::{MaybeMissing, is_missing_text};
pub use value::{Value, format_float};
